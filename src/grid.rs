use crate::error::SettingsError;

/// Square toroidal grid over a linear population index.
///
/// Index `i` sits at `(i / side, i % side)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid
{
    side: usize,
}

impl Grid
{
    pub fn new(population_size: usize) -> Result<Self, SettingsError>
    {
        let side = integer_sqrt(population_size);

        if population_size == 0 || side * side != population_size
        {
            return Err(SettingsError::NonSquarePopulation(population_size));
        }

        Ok(Grid { side })
    }

    pub fn side(&self) -> usize
    {
        self.side
    }

    pub fn size(&self) -> usize
    {
        self.side * self.side
    }

    pub fn coordinates(&self, index: usize) -> (usize, usize)
    {
        debug_assert!(index < self.size());

        (index / self.side, index % self.side)
    }

    pub fn index(&self, row: usize, col: usize) -> usize
    {
        debug_assert!(row < self.side && col < self.side);

        row * self.side + col
    }

    /// Index of the cell `(d_row, d_col)` away from `index`, wrapping at the edges.
    pub fn offset(&self, index: usize, d_row: isize, d_col: isize) -> usize
    {
        let (row, col) = self.coordinates(index);

        self.index(self.wrap(row, d_row), self.wrap(col, d_col))
    }

    fn wrap(&self, coordinate: usize, delta: isize) -> usize
    {
        let side = self.side as isize;

        (coordinate as isize + delta).rem_euclid(side) as usize
    }
}

fn integer_sqrt(n: usize) -> usize
{
    let mut root = (n as f64).sqrt() as usize;

    while root * root > n
    {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n
    {
        root += 1;
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_perfect_squares() {
        for n in [1, 4, 9, 16, 100, 10_000] {
            assert_eq!(Grid::new(n).unwrap().size(), n);
        }

        for n in [0, 2, 3, 8, 10, 99] {
            assert!(matches!(Grid::new(n), Err(SettingsError::NonSquarePopulation(v)) if v == n));
        }
    }

    #[test]
    fn index_and_coordinates_are_inverse() {
        let grid = Grid::new(25).unwrap();

        for i in 0..25 {
            let (row, col) = grid.coordinates(i);
            assert_eq!(grid.index(row, col), i);
        }

        assert_eq!(grid.coordinates(7), (1, 2));
    }

    #[test]
    fn offsets_wrap_around() {
        let grid = Grid::new(16).unwrap();

        assert_eq!(grid.offset(0, -1, 0), 12);
        assert_eq!(grid.offset(0, 0, -1), 3);
        assert_eq!(grid.offset(0, -1, -1), 15);
        assert_eq!(grid.offset(15, 1, 1), 0);
        assert_eq!(grid.offset(5, 1, -1), 8);
    }
}
