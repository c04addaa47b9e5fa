use itertools::Itertools;
use log::trace;
use crate::crowding_distance::crowding_distances;
use crate::dominance::{compare, Dominance};
use crate::solution::Solution;

/// Bounded set of mutually non-dominated solutions.
///
/// When an insertion pushes it over capacity, the member with the smallest
/// crowding distance over the whole archive is dropped. Ties go to the
/// earliest inserted member.
#[derive(Debug, Clone)]
pub struct CrowdingArchive {
    capacity: usize,
    number_of_objectives: usize,
    members: Vec<Solution>,
}

impl CrowdingArchive {
    pub fn new(capacity: usize, number_of_objectives: usize) -> Self {
        CrowdingArchive {
            capacity,
            number_of_objectives,
            members: Vec::with_capacity(capacity + 1),
        }
    }

    /// Offers a candidate. Returns whether it is a member afterwards.
    ///
    /// # Panics
    ///
    /// If the candidate's objective count differs from the archive's.
    pub fn offer(&mut self, candidate: Solution) -> bool {
        assert_eq!(
            candidate.number_of_objectives(),
            self.number_of_objectives,
            "offered solution has {} objectives, archive holds {}",
            candidate.number_of_objectives(),
            self.number_of_objectives
        );

        let mut dominated = Vec::new();

        for (i, member) in self.members.iter().enumerate() {
            match compare(&candidate, member) {
                Dominance::IsDominated => return false,
                Dominance::Dominates => dominated.push(i),
                Dominance::Incomparable => (),
            }
        }

        for i in dominated.into_iter().rev() {
            self.members.remove(i);
        }

        self.members.push(candidate);
        let mut candidate_index = Some(self.members.len() - 1);

        while self.members.len() > self.capacity {
            let worst = self.most_crowded();

            trace!("archive over capacity, evicting member {} of {}", worst, self.members.len());

            candidate_index = match candidate_index {
                Some(c) if c == worst => None,
                Some(c) if c > worst => Some(c - 1),
                other => other,
            };
            self.members.remove(worst);
        }

        candidate_index.is_some()
    }

    fn most_crowded(&self) -> usize {
        crowding_distances(&self.members)
            .iter()
            .position_min_by(|a, b| a.total_cmp(b))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Solution] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<Solution> {
        self.members
    }

    /// Crowding distance of every member, aligned with [`members`](Self::members).
    pub fn crowding_distances(&self) -> Vec<f64> {
        crowding_distances(&self.members)
    }
}
