// src/percolation/site.rs
//! Coordinate validation and grid-to-flat index mapping.

use crate::error::{PercolationError, Result};

/// A validated, 0-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    /// Converts 1-based external coordinates `(i, j)` on an `n`×`n` grid.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` naming the first coordinate outside `[1, n]`.
    pub fn from_external(i: usize, j: usize, n: usize) -> Result<Self> {
        Ok(Self {
            row: to_internal(i, n)?,
            col: to_internal(j, n)?,
        })
    }

    /// Flat index `row * n + col`.
    #[must_use]
    pub fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// In-bounds 4-neighbours in fixed order: up, down, left, right.
    pub fn neighbors(self, n: usize) -> impl Iterator<Item = Site> {
        let Site { row, col } = self;
        let up = row.checked_sub(1).map(|r| Site { row: r, col });
        let down = (row + 1 < n).then(|| Site { row: row + 1, col });
        let left = col.checked_sub(1).map(|c| Site { row, col: c });
        let right = (col + 1 < n).then(|| Site { row, col: col + 1 });
        [up, down, left, right].into_iter().flatten()
    }
}

fn to_internal(coord: usize, n: usize) -> Result<usize> {
    if coord == 0 || coord > n {
        return Err(PercolationError::IndexOutOfRange {
            index: coord,
            low: 1,
            high: n,
        });
    }
    Ok(coord - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_one_based_to_flat_index() {
        let site = Site::from_external(2, 3, 4).unwrap();
        assert_eq!(site, Site { row: 1, col: 2 });
        assert_eq!(site.index(4), 6);
        assert_eq!(Site::from_external(4, 4, 4).unwrap().index(4), 15);
    }

    #[test]
    fn rejects_coordinates_outside_grid() {
        assert!(Site::from_external(0, 1, 3).is_err());
        assert!(Site::from_external(1, 0, 3).is_err());
        assert_eq!(
            Site::from_external(1, 4, 3).unwrap_err(),
            PercolationError::IndexOutOfRange { index: 4, low: 1, high: 3 }
        );
    }

    #[test]
    fn corner_has_two_neighbours() {
        let corner = Site { row: 0, col: 0 };
        let n: Vec<Site> = corner.neighbors(3).collect();
        assert_eq!(n, vec![Site { row: 1, col: 0 }, Site { row: 0, col: 1 }]);
    }

    #[test]
    fn interior_neighbours_in_fixed_order() {
        let centre = Site { row: 1, col: 1 };
        let n: Vec<Site> = centre.neighbors(3).collect();
        assert_eq!(
            n,
            vec![
                Site { row: 0, col: 1 },
                Site { row: 2, col: 1 },
                Site { row: 1, col: 0 },
                Site { row: 1, col: 2 },
            ]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        assert_eq!(Site { row: 0, col: 0 }.neighbors(1).count(), 0);
    }
}
