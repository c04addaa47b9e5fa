use crate::error::ProblemError;
use crate::problem::dtlz::{check_dimensions, calc_spherical_target, g2, resize_objectives};
use crate::problem::{check_variables, Problem};
use crate::solution::Solution;

/// DTLZ4: DTLZ2 with a biased density of solutions (`alpha = 100`).
#[derive(Clone)]
pub struct Dtlz4
{
    name: String,
    n_var: usize,
    n_obj: usize
}

impl Dtlz4 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        Dtlz4 {
            name: format!("DTLZ4 ({} {})", n_var, n_obj),
            n_var,
            n_obj
        }
    }
}

impl Problem for Dtlz4
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

        let g = g2(x_m);

        resize_objectives(&mut solution.objectives, self.n_obj);
        calc_spherical_target(x, g, 100.0, &mut solution.objectives);

        Ok(())
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let x_m = &in_x[self.n_obj - 1..];

        g2(x_m)
    }
}
