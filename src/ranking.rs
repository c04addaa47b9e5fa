use crate::dominance::{compare, Dominance};
use crate::solution::Solution;

/// Non-dominated sorting of a solution set into fronts of indices.
///
/// Front 0 holds every solution no other member dominates; front `k` holds
/// the solutions that become non-dominated once fronts `< k` are removed.
/// Indices inside a front are in input order.
#[derive(Debug, Clone)]
pub struct Ranking {
    fronts: Vec<Vec<usize>>,
    ranks: Vec<usize>,
}

impl Ranking {
    pub fn new(solutions: &[Solution]) -> Self {
        let n = solutions.len();

        let mut dominated_by_count = vec![0usize; n];
        let mut dominated_sets: Vec<Vec<usize>> = vec![Vec::new(); n];

        for p in 0..n {
            for q in (p + 1)..n {
                match compare(&solutions[p], &solutions[q]) {
                    Dominance::Dominates => {
                        dominated_sets[p].push(q);
                        dominated_by_count[q] += 1;
                    }
                    Dominance::IsDominated => {
                        dominated_sets[q].push(p);
                        dominated_by_count[p] += 1;
                    }
                    Dominance::Incomparable => (),
                }
            }
        }

        let mut ranks = vec![0usize; n];
        let mut fronts = Vec::new();

        let mut current: Vec<usize> = (0..n).filter(|&i| dominated_by_count[i] == 0).collect();

        while !current.is_empty() {
            let mut next = Vec::new();

            for &p in &current {
                ranks[p] = fronts.len();

                for &q in &dominated_sets[p] {
                    dominated_by_count[q] -= 1;
                    if dominated_by_count[q] == 0 {
                        next.push(q);
                    }
                }
            }

            next.sort_unstable();
            fronts.push(current);
            current = next;
        }

        debug_assert_eq!(fronts.iter().map(Vec::len).sum::<usize>(), n);

        Ranking { fronts, ranks }
    }

    pub fn number_of_fronts(&self) -> usize {
        self.fronts.len()
    }

    pub fn front(&self, index: usize) -> &[usize] {
        &self.fronts[index]
    }

    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    /// Front index of the solution at `index` in the ranked set.
    pub fn rank(&self, index: usize) -> usize {
        self.ranks[index]
    }
}
