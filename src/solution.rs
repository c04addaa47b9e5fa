use rand::Rng;
use rand::rngs::StdRng;
use crate::problem::Problem;

/// A candidate solution: decision variables, evaluated objectives and
/// constraint information, plus the grid slot it currently occupies.
///
/// Solutions are plain values. Every container keeps its own clone, so
/// replacing a population cell never touches an archived copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution
{
    pub variables: Vec<f64>,
    /// Objective values, all minimised.
    pub objectives: Vec<f64>,
    /// 0.0 when feasible, otherwise the total magnitude of violation.
    pub constraint_violation: f64,
    pub violated_constraints: usize,
    pub slot: Option<usize>,
}

impl Solution
{
    pub fn new(variables: Vec<f64>, number_of_objectives: usize) -> Self
    {
        Solution {
            variables,
            objectives: vec![0.0; number_of_objectives],
            constraint_violation: 0.0,
            violated_constraints: 0,
            slot: None,
        }
    }

    /// Builds an already evaluated solution. Mostly useful for tests and
    /// for feeding an archive directly.
    pub fn with_objectives(objectives: Vec<f64>) -> Self
    {
        Solution {
            variables: vec![],
            objectives,
            constraint_violation: 0.0,
            violated_constraints: 0,
            slot: None,
        }
    }

    /// Uniformly random variables within the problem bounds, not yet evaluated.
    pub fn random(problem: &dyn Problem, rng: &mut StdRng) -> Self
    {
        let variables = (0..problem.number_of_variables())
            .map(|i| rng.gen_range(problem.lower_bound(i)..=problem.upper_bound(i)))
            .collect();

        Solution::new(variables, problem.number_of_objectives())
    }

    pub fn is_feasible(&self) -> bool
    {
        self.constraint_violation <= 0.0
    }

    pub fn number_of_objectives(&self) -> usize
    {
        self.objectives.len()
    }

    /// Drops evaluation results, keeping the decision variables.
    pub fn reset_evaluation(&mut self)
    {
        self.objectives.iter_mut().for_each(|f| *f = 0.0);
        self.constraint_violation = 0.0;
        self.violated_constraints = 0;
        self.slot = None;
    }

    pub(crate) fn has_finite_objectives(&self) -> bool
    {
        self.objectives.iter().all(|f| f.is_finite())
    }
}
