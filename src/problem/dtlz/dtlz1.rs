use crate::error::ProblemError;
use crate::problem::dtlz::{check_dimensions, g1, resize_objectives};
use crate::problem::{check_variables, Problem};
use crate::solution::Solution;

/// DTLZ1: linear Pareto front `sum(f) = 0.5` behind a highly multimodal `g`.
#[derive(Clone)]
pub struct Dtlz1
{
    name: String,
    n_var: usize,
    n_obj: usize
}

impl Dtlz1 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        Dtlz1 {
            name: format!("DTLZ1 ({} {})", n_var, n_obj),
            n_var,
            n_obj
        }
    }
}

impl Problem for Dtlz1
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

        let x = &solution.variables[..self.n_obj - 1];
        let x_m = &solution.variables[self.n_obj - 1..];

        let g = g1(x_m);

        let f = &mut solution.objectives;
        resize_objectives(f, self.n_obj);

        for i in 0..self.n_obj
        {
            let mut f_val = 0.5 * (1.0 + g);

            for x_i in &x[..x.len() - i]
            {
                f_val *= x_i;
            }

            if i > 0
            {
                f_val *= 1.0 - x[x.len() - i];
            }

            f[i] = f_val;
        }

        Ok(())
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let x_m = &in_x[self.n_obj - 1..];

        g1(x_m)
    }
}
