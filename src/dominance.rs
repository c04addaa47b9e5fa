use std::cmp::Ordering;
use crate::solution::Solution;

/// Outcome of comparing `a` against `b`, seen from `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Dominates,
    IsDominated,
    Incomparable,
}

impl Dominance {
    pub fn reverse(self) -> Self {
        match self {
            Dominance::Dominates => Dominance::IsDominated,
            Dominance::IsDominated => Dominance::Dominates,
            Dominance::Incomparable => Dominance::Incomparable,
        }
    }
}

/// Pareto comparison of two objective vectors (minimisation).
///
/// # Panics
///
/// On length mismatch or non-finite values.
pub fn compare_objectives(a: &[f64], b: &[f64]) -> Dominance {
    assert_eq!(a.len(), b.len(), "objective vectors of different length: {:?} vs {:?}", a, b);

    assert!(
        a.iter().chain(b).all(|f| f.is_finite()),
        "non-finite objective values: {:?} vs {:?}",
        a,
        b
    );

    let mut a_better = false;
    let mut b_better = false;

    for (fa, fb) in a.iter().zip(b) {
        match fa.partial_cmp(fb) {
            Some(Ordering::Less) => a_better = true,
            Some(Ordering::Greater) => b_better = true,
            _ => (),
        }

        if a_better && b_better {
            return Dominance::Incomparable;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::IsDominated,
        _ => Dominance::Incomparable,
    }
}

/// Constrained Pareto comparison.
///
/// When the violations differ and at least one side is infeasible, the
/// smaller violation wins outright. Otherwise the objectives decide.
pub fn compare(a: &Solution, b: &Solution) -> Dominance {
    let (cv_a, cv_b) = (a.constraint_violation, b.constraint_violation);

    if cv_a != cv_b && (cv_a > 0.0 || cv_b > 0.0) {
        return if cv_a < cv_b {
            Dominance::Dominates
        } else {
            Dominance::IsDominated
        };
    }

    compare_objectives(&a.objectives, &b.objectives)
}

pub fn dominates(a: &Solution, b: &Solution) -> bool {
    compare(a, b) == Dominance::Dominates
}
