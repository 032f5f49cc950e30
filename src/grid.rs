use crate::color::Color;
use crate::error::GridError;

/// The value of a single cell. `None` means unpainted, drawn as the background.
pub type Cell = Option<Color>;

pub const DEFAULT_DIMENSION: usize = 32;

/// Address of one cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The canonical square matrix of cell colors.
///
/// The dimension is fixed at construction. Every coordinate inside the grid
/// always holds a value; coordinates outside of it are rejected with
/// [`GridError::OutOfRange`] and leave the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl PixelGrid {
    /// Allocates a `dimension` x `dimension` grid with every cell unset
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![None; dimension * dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.dimension + col)
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                dimension: self.dimension,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = Some(color);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = None;
        Ok(())
    }

    /// Paints every cell of the canvas, regardless of what it held before.
    /// This is what the fill tool does by default.
    pub fn fill_all(&mut self, color: Color) {
        self.cells.fill(Some(color));
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// Flood fills the 4-connected region holding the same value as the
    /// starting cell. Returns the number of cells that changed.
    pub fn flood_fill(&mut self, row: usize, col: usize, color: Color) -> Result<usize, GridError> {
        let target = self.get(row, col)?;
        if target == Some(color) {
            return Ok(0);
        }

        let mut changed = 0;
        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            let index = r * self.dimension + c;
            if self.cells[index] != target {
                continue;
            }

            self.cells[index] = Some(color);
            changed += 1;

            if r > 0 {
                stack.push((r - 1, c));
            }
            if r + 1 < self.dimension {
                stack.push((r + 1, c));
            }
            if c > 0 {
                stack.push((r, c - 1));
            }
            if c + 1 < self.dimension {
                stack.push((r, c + 1));
            }
        }

        Ok(changed)
    }

    /// Iterates over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Cell)> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellPos::new(i / dimension, i % dimension), *cell))
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(0xFF, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 0xFF);

    #[test]
    fn test_new_grid_is_unset() {
        let grid = PixelGrid::new(4);
        assert_eq!(grid.dimension(), 4);
        assert_eq!(grid.painted_count(), 0);
        assert!(grid.cells().all(|(_, cell)| cell.is_none()));
        assert_eq!(grid.cells().count(), 16);
    }

    #[test]
    fn test_out_of_range_does_not_mutate() {
        let mut grid = PixelGrid::new(4);
        assert_eq!(
            grid.set(4, 0, RED),
            Err(GridError::OutOfRange { row: 4, col: 0, dimension: 4 })
        );
        assert!(grid.get(0, 4).is_err());
        assert!(grid.clear(9, 9).is_err());
        assert_eq!(grid, PixelGrid::new(4));
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let mut grid = PixelGrid::new(3);
        grid.set(1, 2, RED).unwrap();
        let painted: Vec<_> = grid.cells().filter(|(_, cell)| cell.is_some()).collect();
        assert_eq!(painted, vec![(CellPos::new(1, 2), Some(RED))]);
    }

    #[test]
    fn test_flood_fill_stops_at_boundary() {
        // A vertical wall in column 2 splits the grid in two
        let mut grid = PixelGrid::new(5);
        for row in 0..5 {
            grid.set(row, 2, RED).unwrap();
        }

        let changed = grid.flood_fill(0, 0, BLUE).unwrap();
        assert_eq!(changed, 10);
        assert_eq!(grid.get(4, 1).unwrap(), Some(BLUE));
        assert_eq!(grid.get(3, 2).unwrap(), Some(RED));
        assert_eq!(grid.get(0, 3).unwrap(), None);
    }

    #[test]
    fn test_flood_fill_same_color_is_noop() {
        let mut grid = PixelGrid::new(3);
        grid.fill_all(BLUE);
        assert_eq!(grid.flood_fill(1, 1, BLUE).unwrap(), 0);
        assert!(grid.flood_fill(3, 0, RED).is_err());
    }
}
