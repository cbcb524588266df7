use cgmath::{Vector2, Vector3};
use rand::Rng;

use crate::color;

/// One square of the board. Position and dimensions are in window pixels,
/// matching the cursor coordinate space reported by the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub center: Vector2<f32>,
    pub dimensions: Vector2<f32>,
    pub color: Vector3<f32>,
    pub eliminated: bool,
}

/// A fixed `rows x cols` board of colored cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a full board with one uniformly random color per cell.
    pub fn generate<R: Rng>(
        rows: usize,
        cols: usize,
        cell_width: f32,
        cell_height: f32,
        rng: &mut R,
    ) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                cells.push(Cell {
                    center: Vector2::new(
                        j as f32 * cell_width + cell_width / 2.0,
                        i as f32 * cell_height + cell_height / 2.0,
                    ),
                    dimensions: Vector2::new(cell_width, cell_height),
                    color: Vector3::new(
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                    ),
                    eliminated: false,
                });
            }
        }

        Self {
            rows,
            cols,
            cell_width,
            cell_height,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Maps a cursor position in pixels to the linear index of an active cell.
    ///
    /// Indices are derived from the distance to the nearest cell center,
    /// truncated toward zero. The first column therefore answers for
    /// `x < 1.5 * cell_width` and the right half-column of the window maps to
    /// the last column.
    pub fn pick(&self, x: f64, y: f64) -> Option<usize> {
        let col = ((x - self.cell_width as f64 / 2.0) / self.cell_width as f64) as isize;
        let row = ((y - self.cell_height as f64 / 2.0) / self.cell_height as f64) as isize;

        if col < 0 || col >= self.cols as isize || row < 0 || row >= self.rows as isize {
            return None;
        }

        let index = row as usize * self.cols + col as usize;

        if self.cells[index].eliminated {
            return None;
        }

        Some(index)
    }

    /// Eliminates the seed cell and every still-active cell whose color lies
    /// within `tolerance` of the seed color, in a single pass over the board.
    /// Returns how many cells this call removed, seed included.
    pub fn eliminate_similar(&mut self, seed: usize, tolerance: f32) -> usize {
        if seed >= self.cells.len() || self.cells[seed].eliminated {
            return 0;
        }

        let target = self.cells[seed].color;
        self.cells[seed].eliminated = true;

        let mut removed = 1;

        for cell in &mut self.cells {
            if !cell.eliminated && color::similar(cell.color, target, tolerance) {
                cell.eliminated = true;
                removed += 1;
            }
        }

        removed
    }

    pub fn any_active(&self) -> bool {
        self.cells.iter().any(|c| !c.eliminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn test_grid() -> Grid {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        Grid::generate(6, 8, 100.0, 100.0, &mut rng)
    }

    /// Overwrites every color so similarity is under the test's control.
    fn paint(grid: &mut Grid, colors: &[(usize, Vector3<f32>)]) {
        for (index, color) in colors {
            grid.cells[*index].color = *color;
        }
    }

    #[test]
    fn generate_lays_out_centers_row_major() {
        let grid = test_grid();

        assert_eq!(grid.cells().len(), 48);
        assert_eq!(grid.cells()[0].center, Vector2::new(50.0, 50.0));
        assert_eq!(grid.cells()[7].center, Vector2::new(750.0, 50.0));
        assert_eq!(grid.cells()[8].center, Vector2::new(50.0, 150.0));
        assert_eq!(grid.cells()[47].center, Vector2::new(750.0, 550.0));
        assert!(grid.any_active());
    }

    #[test]
    fn generate_is_reproducible_for_a_seed() {
        let a = test_grid();
        let b = test_grid();

        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn pick_truncates_toward_the_nearest_center() {
        let grid = test_grid();

        // the first column is half a cell wider than the rest
        assert_eq!(grid.pick(0.0, 0.0), Some(0));
        assert_eq!(grid.pick(149.0, 99.0), Some(0));
        assert_eq!(grid.pick(150.0, 99.0), Some(1));
        assert_eq!(grid.pick(150.0, 150.0), Some(9));
        assert_eq!(grid.pick(799.0, 599.0), Some(47));
    }

    #[test]
    fn pick_rejects_positions_off_the_board() {
        let grid = test_grid();

        assert_eq!(grid.pick(-100.0, 50.0), None);
        assert_eq!(grid.pick(850.0, 50.0), None);
        assert_eq!(grid.pick(50.0, 10_000.0), None);
    }

    #[test]
    fn pick_ignores_eliminated_cells() {
        let mut grid = test_grid();

        grid.eliminate_similar(0, 0.0);

        assert_eq!(grid.pick(0.0, 0.0), None);
    }

    #[test]
    fn eliminate_with_zero_tolerance_removes_seed_and_exact_duplicates() {
        let mut grid = test_grid();

        let red = Vector3::new(1.0, 0.0, 0.0);
        let blue = Vector3::new(0.0, 0.0, 1.0);

        for index in 0..48 {
            paint(&mut grid, &[(index, blue)]);
        }
        paint(&mut grid, &[(0, red), (13, red), (40, red)]);

        assert_eq!(grid.eliminate_similar(0, 0.0), 3);
        assert!(grid.any_active());
    }

    #[test]
    fn eliminate_with_full_tolerance_clears_the_board() {
        let mut grid = test_grid();

        assert_eq!(grid.eliminate_similar(17, 1.0), 48);
        assert!(!grid.any_active());
    }

    #[test]
    fn eliminated_cells_are_not_recounted() {
        let mut grid = test_grid();

        let red = Vector3::new(1.0, 0.0, 0.0);
        let green = Vector3::new(0.0, 1.0, 0.0);
        let blue = Vector3::new(0.0, 0.0, 1.0);

        for index in 0..48 {
            paint(&mut grid, &[(index, blue)]);
        }
        paint(&mut grid, &[(0, red), (1, red), (2, green), (3, green)]);

        assert_eq!(grid.eliminate_similar(0, 0.1), 2);
        // the red cells are already gone and must not count again
        assert_eq!(grid.eliminate_similar(2, 0.1), 2);
        assert_eq!(grid.eliminate_similar(2, 0.1), 0);
    }

    #[test]
    fn eliminate_rejects_out_of_range_seeds() {
        let mut grid = test_grid();

        assert_eq!(grid.eliminate_similar(48, 1.0), 0);
        assert!(grid.any_active());
    }
}
