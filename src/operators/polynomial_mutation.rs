use rand::Rng;
use rand::rngs::StdRng;
use crate::operators::Mutation;
use crate::solution::Solution;

/// Bounded polynomial mutation applied independently to each variable.
#[derive(Debug, Clone)]
pub struct PolynomialMutation
{
    probability: f64,
    distribution_index: f64,
    bounds: Vec<(f64, f64)>,
}

impl PolynomialMutation
{
    pub fn new(probability: f64, distribution_index: f64, bounds: Vec<(f64, f64)>) -> Self
    {
        PolynomialMutation {
            probability,
            distribution_index,
            bounds,
        }
    }

    fn perturb(&self, rng: &mut StdRng, y: f64, lower: f64, upper: f64) -> f64
    {
        if lower == upper
        {
            return lower;
        }

        let range = upper - lower;
        let delta1 = (y - lower) / range;
        let delta2 = (upper - y) / range;
        let power = 1.0 / (self.distribution_index + 1.0);
        let rnd = rng.gen::<f64>();

        let delta_q = if rnd <= 0.5
        {
            let xy = 1.0 - delta1;
            let val = 2.0 * rnd + (1.0 - 2.0 * rnd) * xy.powf(self.distribution_index + 1.0);
            val.powf(power) - 1.0
        }
        else
        {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - rnd) + 2.0 * (rnd - 0.5) * xy.powf(self.distribution_index + 1.0);
            1.0 - val.powf(power)
        };

        (y + delta_q * range).clamp(lower, upper)
    }
}

impl Mutation for PolynomialMutation
{
    fn mutate(&self, rng: &mut StdRng, solution: &mut Solution)
    {
        for (x, &(lower, upper)) in solution.variables.iter_mut().zip(&self.bounds)
        {
            if rng.gen::<f64>() < self.probability
            {
                *x = self.perturb(rng, *x, lower, upper);
            }
        }
    }
}
