use crate::error::ProblemError;
use crate::problem::dtlz::{check_dimensions, resize_objectives};
use crate::problem::{check_variables, Problem};
use crate::solution::Solution;

/// DTLZ7: disconnected Pareto front.
#[derive(Clone)]
pub struct Dtlz7
{
    name: String,
    n_var: usize,
    n_obj: usize
}

fn g(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m.iter()
    {
        sum += x_m_i;
    }

    1.0 + sum * 9.0 / x_m.len() as  f64
}

impl Dtlz7 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        Dtlz7 {
            name: format!("DTLZ7 ({} {})", n_var, n_obj),
            n_var,
            n_obj
        }
    }

    fn k(&self) -> usize
    {
        self.n_var - self.n_obj + 1
    }
}

impl Problem for Dtlz7
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn number_of_variables(&self) -> usize {
        self.n_var
    }

    fn number_of_objectives(&self) -> usize {
        self.n_obj
    }

    fn lower_bound(&self, _index: usize) -> f64 {
        0.0
    }

    fn upper_bound(&self, _index: usize) -> f64 {
        1.0
    }

    fn evaluate(&self, solution: &mut Solution) -> Result<(), ProblemError> {
        check_variables(self, solution)?;
        check_dimensions(self)?;

        let x = &solution.variables;
        let g = g(&x[x.len() - self.k()..]);

        let f = &mut solution.objectives;
        resize_objectives(f, self.n_obj);

        for i in 0..f.len() - 1
        {
            f[i] = x[i];
        }

        let mut h_sum = 0.0;

        for i in 0..f.len() - 1
        {
            h_sum += (f[i] / (1.0 + g)) * (1.0 + (3.0 * std::f64::consts::PI * f[i]).sin())
        }

        let h = self.n_obj as f64 - h_sum;

        f[self.n_obj - 1] = h * (1.0 + g);

        Ok(())
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        g(&in_x[in_x.len() - self.k()..]) - 1.0
    }
}
