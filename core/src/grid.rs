use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-shape mine field together with the player-visible state of every cell.
///
/// Cells are stored column-major, indexed `[x, y]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
    covered_count: CellCount,
    flagged_count: CellCount,
}

impl Grid {
    /// Builds the grid from a mine mask, computing every adjacency count once.
    ///
    /// A mask with a zero-length axis is rejected, as is one too large to be addressed by `Coord`.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (size_x, size_y) = mine_mask.dim();
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }
        if Coord::try_from(size_x).is_err() || Coord::try_from(size_y).is_err() {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::from_mine_mask_unchecked(mine_mask))
    }

    /// Same as [`Grid::from_mine_mask`] for masks already shaped from a valid `Coord2`.
    pub(crate) fn from_mine_mask_unchecked(mine_mask: &Array2<bool>) -> Self {
        let (size_x, size_y) = mine_mask.dim();
        let size = (size_x as Coord, size_y as Coord);
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(x, y)| {
            let mine = mine_mask[(x, y)];
            if mine {
                mine_count += 1;
            }
            // at most 8, fits a u8
            let adjacent_mines = window((x as Coord, y as Coord), size)
                .filter(|&pos| mine_mask[ix(pos)])
                .count() as u8;
            Cell::new(mine, adjacent_mines)
        });
        let covered_count = area(size);

        Self {
            cells,
            mine_count,
            covered_count,
            flagged_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut mine_mask: Array2<bool> = Array2::default(ix(size));
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[ix(coords)] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // checked on construction
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    /// Mines actually placed, which can be below the density target.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn covered_count(&self) -> CellCount {
        self.covered_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Copy of the cell at `coords`, panics when out of range.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    /// The up to 8 cells touching `coords`, clamped to the grid.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        window(coords, self.size())
    }

    /// Every coordinate in generation order: x outer, y inner.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (size_x, size_y) = self.size();
        (0..size_x).flat_map(move |x| (0..size_y).map(move |y| (x, y)))
    }

    /// Marks a covered cell revealed, returns `false` if it already was.
    pub(crate) fn uncover(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[ix(coords)];
        if cell.is_revealed() {
            return false;
        }
        // forced reveals open flagged cells, the flag stays and still counts
        cell.reveal();
        self.covered_count -= 1;
        true
    }

    /// Toggles the flag on a covered cell, returns `false` for revealed cells.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[ix(coords)];
        if cell.is_revealed() {
            return false;
        }
        cell.toggle_flag();
        if cell.is_flagged() {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        true
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[ix(coords)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(size, mines).unwrap()
    }

    fn brute_force_count(grid: &Grid, (x, y): Coord2) -> u8 {
        let (w, h) = grid.size();
        let mut count = 0;
        for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                if (nx, ny) != (x, y) && grid[(nx, ny)].is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn adjacency_matches_bounded_window() {
        let grid = grid((5, 4), &[(0, 0), (2, 1), (4, 3), (3, 3), (1, 2)]);

        for coords in grid.iter_coords() {
            assert_eq!(
                grid[coords].adjacent_mines(),
                brute_force_count(&grid, coords),
                "at {coords:?}"
            );
        }
        assert_eq!(grid.mine_count(), 5);
    }

    #[test]
    fn single_mine_in_corner_counts() {
        let grid = grid((3, 3), &[(2, 2)]);

        assert_eq!(grid[(0, 0)].adjacent_mines(), 0);
        assert_eq!(grid[(1, 1)].adjacent_mines(), 1);
        assert_eq!(grid[(2, 1)].adjacent_mines(), 1);
        assert_eq!(grid[(1, 2)].adjacent_mines(), 1);
        assert_eq!(grid[(0, 2)].adjacent_mines(), 0);
        assert!(grid[(2, 2)].is_mine());
    }

    #[test]
    fn fully_mined_grid_counts_all_neighbors() {
        let mines: Vec<Coord2> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let grid = grid((3, 3), &mines);

        assert_eq!(grid[(0, 0)].adjacent_mines(), 3);
        assert_eq!(grid[(1, 0)].adjacent_mines(), 5);
        assert_eq!(grid[(1, 1)].adjacent_mines(), 8);
    }

    #[test]
    fn starts_fully_covered() {
        let grid = grid((4, 2), &[(1, 1)]);

        assert_eq!(grid.covered_count(), 8);
        assert!(grid.iter_coords().all(|pos| !grid[pos].is_revealed()));
    }

    #[test]
    fn iter_coords_is_column_major() {
        let grid = grid((2, 3), &[]);
        let order: Vec<_> = grid.iter_coords().collect();

        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn uncover_is_idempotent_and_tracks_covered_count() {
        let mut grid = grid((2, 2), &[]);

        assert!(grid.uncover((1, 0)));
        assert!(!grid.uncover((1, 0)));
        assert_eq!(grid.covered_count(), 3);
    }

    #[test]
    fn flags_only_toggle_on_covered_cells() {
        let mut grid = grid((2, 2), &[]);

        assert!(grid.toggle_flag((0, 0)));
        assert!(grid[(0, 0)].is_flagged());
        assert_eq!(grid.flagged_count(), 1);

        grid.uncover((1, 1));
        assert!(!grid.toggle_flag((1, 1)));
        assert!(!grid[(1, 1)].is_flagged());

        assert!(grid.toggle_flag((0, 0)));
        assert_eq!(grid.flagged_count(), 0);
    }

    #[test]
    fn uncovering_flagged_cell_keeps_flag_count() {
        let mut grid = grid((2, 2), &[(0, 0)]);
        grid.toggle_flag((0, 0));

        assert!(grid.uncover((0, 0)));
        assert!(grid[(0, 0)].is_flagged());
        assert_eq!(grid.flagged_count(), 1);
    }

    #[test]
    fn neighbors_stay_inside_the_grid() {
        let grid = grid((3, 2), &[]);

        let corner: Vec<_> = grid.neighbors((2, 1)).collect();
        assert_eq!(corner, vec![(1, 0), (1, 1), (2, 0)]);
        assert_eq!(grid.neighbors((1, 0)).count(), 5);
    }

    #[test]
    fn rejects_mines_outside_the_grid() {
        assert_eq!(
            Grid::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Grid::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn validate_coords_rejects_out_of_range() {
        let grid = grid((3, 2), &[]);

        assert_eq!(grid.validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(grid.validate_coords((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(grid.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }
}
