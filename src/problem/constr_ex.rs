use crate::error::ProblemError;
use crate::problem::{check_variables, Problem};
use crate::solution::Solution;

const LOWER: [f64; 2] = [0.1, 0.0];
const UPPER: [f64; 2] = [1.0, 5.0];

/// Two-variable, two-objective problem with two inequality constraints:
///
/// ```text
/// f1 = x1            g1 = x2 + 9 x1 - 6 >= 0
/// f2 = (1 + x2) / x1  g2 = -x2 + 9 x1 - 1 >= 0
/// ```
#[derive(Clone, Default)]
pub struct ConstrEx;

impl ConstrEx {
    pub fn new() -> Self {
        ConstrEx
    }

    fn constraints(x: &[f64]) -> [f64; 2] {
        [x[1] + 9.0 * x[0] - 6.0, -x[1] + 9.0 * x[0] - 1.0]
    }
}

impl Problem for ConstrEx {
    fn name(&self) -> &str {
        "ConstrEx"
    }

    fn number_of_variables(&self) -> usize {
        2
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_constraints(&self) -> usize {
        2
    }

    fn lower_bound(&self, index: usize) -> f64 {
        LOWER[index]
    }

    fn upper_bound(&self, index: usize) -> f64 {
        UPPER[index]
    }

    fn evaluate(&self, solution: &mut Solution) -> Result<(), ProblemError> {
        check_variables(self, solution)?;

        let x = &solution.variables;
        if x[0] == 0.0 {
            return Err(ProblemError::new(self.name(), "x1 must be non-zero"));
        }

        solution.objectives = vec![x[0], (1.0 + x[1]) / x[0]];

        Ok(())
    }

    fn evaluate_constraints(&self, solution: &mut Solution) -> Result<(), ProblemError> {
        check_variables(self, solution)?;

        let (violation, violated) = Self::constraints(&solution.variables)
            .iter()
            .filter(|c| **c < 0.0)
            .fold((0.0, 0), |(total, count), c| (total - c, count + 1));

        solution.constraint_violation = violation;
        solution.violated_constraints = violated;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(x: [f64; 2]) -> Solution {
        let problem = ConstrEx::new();
        let mut solution = Solution::new(x.to_vec(), 2);
        problem.evaluate(&mut solution).unwrap();
        problem.evaluate_constraints(&mut solution).unwrap();
        solution
    }

    #[test]
    fn feasible_point_has_no_violation() {
        let solution = evaluated([0.8, 1.0]);

        assert!(solution.is_feasible());
        assert_eq!(solution.violated_constraints, 0);
        assert_eq!(solution.objectives, vec![0.8, 2.0 / 0.8]);
    }

    #[test]
    fn infeasible_point_accumulates_violation() {
        // g1 = 0 + 0.9 - 6 = -5.1, g2 = 0 + 0.9 - 1 = -0.1
        let solution = evaluated([0.1, 0.0]);

        assert!(!solution.is_feasible());
        assert_eq!(solution.violated_constraints, 2);
        assert!((solution.constraint_violation - 5.2).abs() < 1e-12);
    }
}
