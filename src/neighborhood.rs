use crate::grid::Grid;
use crate::solution::Solution;

/// Moore neighbourhood offsets, row-major around the centre.
pub const EIGHT_NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid indices of the eight cells around `index`.
///
/// On grids narrower than 3 the wrapped offsets land on the same cells more
/// than once; they are still all returned.
pub fn neighbor_indices(grid: &Grid, index: usize) -> [usize; 8] {
    EIGHT_NEIGHBORS.map(|(d_row, d_col)| grid.offset(index, d_row, d_col))
}

/// Clones of the eight neighbours of `index` followed by the individual at
/// `index` itself.
pub fn neighbors_of(grid: &Grid, population: &[Solution], index: usize) -> Vec<Solution> {
    debug_assert_eq!(population.len(), grid.size());

    let mut pool = Vec::with_capacity(EIGHT_NEIGHBORS.len() + 2);

    pool.extend(neighbor_indices(grid, index).iter().map(|&i| population[i].clone()));
    pool.push(population[index].clone());

    pool
}
