use std::cmp::Ordering;
use crate::ranking::Ranking;
use crate::solution::Solution;

/// Crowding distances for the members of `front` (indices into `solutions`),
/// returned in the order of `front`.
///
/// Boundary members on any objective get `f64::INFINITY`; fronts of one or
/// two members are all boundary. Objectives with zero range add nothing.
///
/// # Panics
///
/// If a member does not have exactly `number_of_objectives` finite values.
pub fn crowding_distance_assignment(solutions: &[Solution], front: &[usize], number_of_objectives: usize) -> Vec<f64>
{
    for &i in front
    {
        let objectives = &solutions[i].objectives;

        assert_eq!(objectives.len(), number_of_objectives, "malformed objective vector {:?}", objectives);
        assert!(objectives.iter().all(|f| f.is_finite()), "non-finite objective vector {:?}", objectives);
    }

    let size = front.len();

    if size <= 2
    {
        return vec![f64::INFINITY; size];
    }

    let mut distance = vec![0.0; size];
    // positions into `front`, re-sorted per objective
    let mut order: Vec<usize> = (0..size).collect();

    for m in 0..number_of_objectives
    {
        let value = |position: usize| solutions[front[position]].objectives[m];

        order.sort_by(|&a, &b| value(a).total_cmp(&value(b)));

        let first = order[0];
        let last = order[size - 1];

        distance[first] = f64::INFINITY;
        distance[last] = f64::INFINITY;

        let range = value(last) - value(first);

        if range == 0.0
        {
            continue;
        }

        for k in 1..size - 1
        {
            let position = order[k];

            if distance[position] != f64::INFINITY
            {
                distance[position] += (value(order[k + 1]) - value(order[k - 1])) / range;
            }
        }
    }

    distance
}

/// Crowding distances treating the whole set as one front.
pub fn crowding_distances(solutions: &[Solution]) -> Vec<f64>
{
    let Some(first) = solutions.first() else {
        return vec![];
    };

    let front: Vec<usize> = (0..solutions.len()).collect();

    crowding_distance_assignment(solutions, &front, first.number_of_objectives())
}

/// Front index and crowding distance of one member of a ranked set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdedRank
{
    pub rank: usize,
    pub distance: f64,
}

impl CrowdedRank
{
    /// Lower front first, then larger distance. `Ordering::Less` means `self` is better.
    pub fn crowded_cmp(&self, other: &CrowdedRank) -> Ordering
    {
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.distance.total_cmp(&self.distance))
    }
}

/// Ranks `solutions` and computes crowding distances front by front.
/// The result is aligned with `solutions`.
pub fn rank_and_crowd(solutions: &[Solution]) -> Vec<CrowdedRank>
{
    let Some(first) = solutions.first() else {
        return vec![];
    };

    let number_of_objectives = first.number_of_objectives();
    let ranking = Ranking::new(solutions);

    let mut result = vec![CrowdedRank { rank: 0, distance: 0.0 }; solutions.len()];

    for (rank, front) in ranking.fronts().iter().enumerate()
    {
        let distances = crowding_distance_assignment(solutions, front, number_of_objectives);

        for (&i, distance) in front.iter().zip(distances)
        {
            result[i] = CrowdedRank { rank, distance };
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use super::*;

    fn solutions(points: &[&[f64]]) -> Vec<Solution> {
        points.iter().map(|p| Solution::with_objectives(p.to_vec())).collect()
    }

    #[test]
    fn single_objective_line() {
        let set = solutions(&[&[1.0], &[2.0], &[3.0]]);

        let distances = crowding_distances(&set);

        assert_eq!(distances, vec![f64::INFINITY, 1.0, f64::INFINITY]);
    }

    #[test]
    fn unordered_input_keeps_alignment() {
        let set = solutions(&[&[3.0], &[1.0], &[2.0]]);

        let distances = crowding_distances(&set);

        assert_eq!(distances, vec![f64::INFINITY, f64::INFINITY, 1.0]);
    }

    #[test]
    fn two_objective_interior_sums_normalised_gaps() {
        let set = solutions(&[&[0.0, 4.0], &[1.0, 3.0], &[3.0, 1.0], &[4.0, 0.0]]);

        let distances = crowding_distances(&set);

        // member 1: (3 - 0) / 4 on both objectives
        assert_eq!(distances[1], 1.5);
        assert_eq!(distances[2], 1.5);
        assert!(distances[0].is_infinite() && distances[3].is_infinite());
    }

    #[test]
    fn small_fronts_are_all_boundary() {
        assert_eq!(crowding_distances(&solutions(&[&[1.0, 1.0]])), vec![f64::INFINITY]);
        assert_eq!(
            crowding_distances(&solutions(&[&[1.0, 2.0], &[2.0, 1.0]])),
            vec![f64::INFINITY; 2]
        );
        assert!(crowding_distances(&[]).is_empty());
    }

    #[test]
    fn constant_objective_is_skipped() {
        let set = solutions(&[&[1.0, 5.0], &[2.0, 5.0], &[4.0, 5.0]]);

        let distances = crowding_distances(&set);

        assert_eq!(distances[1], 1.0);
        assert!(distances.iter().all(|d| !d.is_nan()));
    }

    #[test]
    fn assignment_over_a_subset() {
        let set = solutions(&[&[9.0, 9.0], &[1.0], &[2.0], &[4.0]]);

        let distances = crowding_distance_assignment(&set, &[1, 2, 3], 1);

        assert_eq!(distances, vec![f64::INFINITY, 1.0, f64::INFINITY]);
    }

    #[test]
    #[should_panic]
    fn mismatched_objective_count_panics() {
        let set = solutions(&[&[1.0, 2.0], &[2.0], &[3.0, 1.0]]);

        crowding_distances(&set);
    }

    #[test]
    fn crowded_comparison_prefers_rank_then_distance() {
        let front0_dense = CrowdedRank { rank: 0, distance: 0.1 };
        let front0_sparse = CrowdedRank { rank: 0, distance: f64::INFINITY };
        let front1 = CrowdedRank { rank: 1, distance: f64::INFINITY };

        assert_eq!(front0_dense.crowded_cmp(&front1), Ordering::Less);
        assert_eq!(front0_sparse.crowded_cmp(&front0_dense), Ordering::Less);
        assert_eq!(front0_dense.crowded_cmp(&front0_dense), Ordering::Equal);
    }

    #[test]
    fn rank_and_crowd_assigns_per_front() {
        let set = solutions(&[&[1.0, 3.0], &[2.0, 2.0], &[3.0, 1.0], &[3.0, 3.0]]);

        let crowded = rank_and_crowd(&set);

        assert_eq!(crowded[1], CrowdedRank { rank: 0, distance: 2.0 });
        assert_eq!(crowded[3].rank, 1);
        assert!(crowded[3].distance.is_infinite());
    }

    proptest! {
        #[test]
        fn extremes_are_infinite(points in prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 3..30)) {
            let set: Vec<Solution> = points
                .iter()
                .map(|(a, b)| Solution::with_objectives(vec![*a, *b]))
                .collect();

            let distances = crowding_distances(&set);

            for m in 0..2 {
                let values: Vec<f64> = set.iter().map(|s| s.objectives[m]).collect();
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

                if min < max {
                    // at least one member attaining each extreme is marked as boundary
                    prop_assert!(values.iter().zip(&distances).any(|(v, d)| *v == min && d.is_infinite()));
                    prop_assert!(values.iter().zip(&distances).any(|(v, d)| *v == max && d.is_infinite()));
                }
            }

            prop_assert!(distances.iter().all(|d| *d >= 0.0));
        }
    }
}
