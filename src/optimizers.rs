use crate::error::MocellError;
use crate::evaluator::Evaluator;
use crate::solution::Solution;

pub mod mocell;

pub trait Optimizer
{
    fn name(&self) -> &str;

    /// Runs until `eval` says stop. Problem failures abort the run.
    fn optimize(&mut self, eval: &mut dyn Evaluator) -> Result<(), MocellError>;

    /// Non-dominated solutions found by the last run.
    fn best_solutions(&self) -> Vec<Solution>;
}
