pub mod dtlz;
pub mod constr_ex;

use dyn_clone::DynClone;
use crate::error::ProblemError;
use crate::solution::Solution;

/// The optimization problem: turns decision variables into objective values.
///
/// Evaluation must be a deterministic function of `solution.variables`.
pub trait Problem: DynClone {
    fn name(&self) -> &str;
    fn number_of_variables(&self) -> usize;
    fn number_of_objectives(&self) -> usize;

    fn number_of_constraints(&self) -> usize {
        0
    }

    fn lower_bound(&self, index: usize) -> f64;
    fn upper_bound(&self, index: usize) -> f64;

    /// Fills `solution.objectives` from `solution.variables`.
    fn evaluate(&self, solution: &mut Solution) -> Result<(), ProblemError>;

    /// Fills the constraint fields. Unconstrained problems leave the solution feasible.
    fn evaluate_constraints(&self, solution: &mut Solution) -> Result<(), ProblemError> {
        solution.constraint_violation = 0.0;
        solution.violated_constraints = 0;
        Ok(())
    }

    /// Distance-to-front indicator for benchmark problems, 0.0 on the optimal front.
    fn convergence_metric(&self, _variables: &[f64]) -> f64 {
        f64::NAN
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        (0..self.number_of_variables())
            .map(|i| (self.lower_bound(i), self.upper_bound(i)))
            .collect()
    }
}

dyn_clone::clone_trait_object!(Problem);

pub(crate) fn check_variables(problem: &dyn Problem, solution: &Solution) -> Result<(), ProblemError> {
    if solution.variables.len() != problem.number_of_variables() {
        return Err(ProblemError::new(
            problem.name(),
            format!(
                "expected {} variables, got {}",
                problem.number_of_variables(),
                solution.variables.len()
            ),
        ));
    }

    Ok(())
}
