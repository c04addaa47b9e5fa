use rand::Rng;
use rand::rngs::StdRng;
use crate::operators::Crossover;
use crate::solution::Solution;

const EPS: f64 = 1.0e-14;

/// Simulated binary crossover with bounded spread.
#[derive(Debug, Clone)]
pub struct SbxCrossover
{
    probability: f64,
    distribution_index: f64,
    bounds: Vec<(f64, f64)>,
}

impl SbxCrossover
{
    pub fn new(probability: f64, distribution_index: f64, bounds: Vec<(f64, f64)>) -> Self
    {
        SbxCrossover {
            probability,
            distribution_index,
            bounds,
        }
    }

    fn beta_q(&self, rand: f64, beta: f64) -> f64
    {
        let exponent = 1.0 / (self.distribution_index + 1.0);
        let alpha = 2.0 - beta.powf(-(self.distribution_index + 1.0));

        if rand <= 1.0 / alpha
        {
            (rand * alpha).powf(exponent)
        }
        else
        {
            (1.0 / (2.0 - rand * alpha)).powf(exponent)
        }
    }
}

impl Crossover for SbxCrossover
{
    fn cross(&self, rng: &mut StdRng, parent1: &Solution, parent2: &Solution) -> Vec<Solution>
    {
        let mut offspring1 = parent1.clone();
        let mut offspring2 = parent2.clone();
        offspring1.reset_evaluation();
        offspring2.reset_evaluation();

        if rng.gen::<f64>() >= self.probability
        {
            return vec![offspring1, offspring2];
        }

        let genes = parent1.variables.iter().zip(&parent2.variables).zip(&self.bounds);

        for (i, ((&x1, &x2), &(lower, upper))) in genes.enumerate()
        {
            if rng.gen::<f64>() > 0.5 || (x1 - x2).abs() <= EPS
            {
                continue;
            }

            let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let rand = rng.gen::<f64>();

            let beta_q = self.beta_q(rand, 1.0 + 2.0 * (y1 - lower) / (y2 - y1));
            let c1 = (0.5 * ((y1 + y2) - beta_q * (y2 - y1))).clamp(lower, upper);

            let beta_q = self.beta_q(rand, 1.0 + 2.0 * (upper - y2) / (y2 - y1));
            let c2 = (0.5 * ((y1 + y2) + beta_q * (y2 - y1))).clamp(lower, upper);

            if rng.gen_bool(0.5)
            {
                offspring1.variables[i] = c2;
                offspring2.variables[i] = c1;
            }
            else
            {
                offspring1.variables[i] = c1;
                offspring2.variables[i] = c2;
            }
        }

        vec![offspring1, offspring2]
    }
}
