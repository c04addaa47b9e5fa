/// Evaluate the termination condition
pub trait Evaluator {
    /// Returns true if an optimization process can be stopped.
    ///
    /// Checked once before every generation with the number of problem
    /// evaluations spent so far.
    fn can_terminate(&mut self, evaluations: usize) -> bool;
}

/// Stops once the evaluation budget is spent.
///
/// A generation is never interrupted, so a run may overshoot the budget by
/// less than one population's worth of evaluations.
pub struct MaxEvaluations {
    max_evaluations: usize,
}

impl MaxEvaluations {
    pub fn new(max_evaluations: usize) -> Self {
        MaxEvaluations { max_evaluations }
    }
}

impl Evaluator for MaxEvaluations {
    fn can_terminate(&mut self, evaluations: usize) -> bool {
        evaluations >= self.max_evaluations
    }
}
