use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::export::Snapshot;
use crate::grid::{Cell, CellPos, PixelGrid};
use crate::state::Repaint;

/// Color of unpainted cells
pub const BACKGROUND: Color = Color::WHITE;

/// The raster projection of the grid, `cell_size` pixels per cell along each axis.
///
/// It holds nothing the grid does not; [`Surface::repaint_from`] rebuilds it
/// from scratch at any time.
#[derive(Debug, Clone)]
pub struct Surface {
    dimension: usize,
    cell_size: u32,
    image: RgbImage,
    /// Bumped on every change so the texture knows when to re-upload
    version: u64,
}

impl Surface {
    /// Creates a blank surface for a `dimension` x `dimension` grid.
    ///
    /// Sizes should come from a validated [`EditorConfig`](crate::config::EditorConfig);
    /// a side that does not fit in a `u32` saturates instead of wrapping.
    pub fn new(dimension: usize, cell_size: u32) -> Self {
        let side = u32::try_from(dimension)
            .unwrap_or(u32::MAX)
            .saturating_mul(cell_size);
        Self {
            dimension,
            cell_size,
            image: RgbImage::from_pixel(side, side, BACKGROUND.into()),
            version: 0,
        }
    }

    pub fn from_grid(grid: &PixelGrid, cell_size: u32) -> Self {
        let mut surface = Self::new(grid.dimension(), cell_size);
        surface.repaint_from(grid);
        surface
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Color of one surface pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            let Rgb([r, g, b]) = *self.image.get_pixel(x, y);
            Some(Color::rgb(r, g, b))
        } else {
            None
        }
    }

    pub fn apply(&mut self, repaint: Repaint, grid: &PixelGrid) {
        match repaint {
            Repaint::Cell { pos, color } => self.paint_cell(pos, color),
            Repaint::Fill(color) => self.paint_all(color),
            Repaint::Grid => self.repaint_from(grid),
        }
    }

    /// Paints the `cell_size` x `cell_size` block of one cell
    pub fn paint_cell(&mut self, pos: CellPos, cell: Cell) {
        if pos.row >= self.dimension || pos.col >= self.dimension {
            log::warn!("Ignoring repaint of cell {:?} outside the surface", pos);
            return;
        }

        let pixel: Rgb<u8> = cell.unwrap_or(BACKGROUND).into();
        let x0 = pos.col as u32 * self.cell_size;
        let y0 = pos.row as u32 * self.cell_size;
        for y in y0..y0 + self.cell_size {
            for x in x0..x0 + self.cell_size {
                self.image.put_pixel(x, y, pixel);
            }
        }
        self.version += 1;
    }

    pub fn paint_all(&mut self, cell: Cell) {
        let pixel: Rgb<u8> = cell.unwrap_or(BACKGROUND).into();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
        self.version += 1;
    }

    pub fn repaint_from(&mut self, grid: &PixelGrid) {
        self.paint_all(None);
        for (pos, cell) in grid.cells().filter(|(_, cell)| cell.is_some()) {
            self.paint_cell(pos, cell);
        }
    }

    /// Copies the current raster. Later painting does not affect the copy.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(0xFF, 0, 0);

    #[test]
    fn test_new_surface_is_background() {
        let surface = Surface::new(32, 16);
        assert_eq!((surface.width(), surface.height()), (512, 512));
        assert_eq!(surface.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(surface.pixel(511, 511), Some(BACKGROUND));
        assert_eq!(surface.pixel(512, 0), None);
    }

    #[test]
    fn test_paint_cell_covers_exactly_one_block() {
        let mut surface = Surface::new(4, 4);
        surface.paint_cell(CellPos::new(1, 2), Some(RED));

        // cell (1, 2) spans x 8..12, y 4..8
        assert_eq!(surface.pixel(8, 4), Some(RED));
        assert_eq!(surface.pixel(11, 7), Some(RED));
        assert_eq!(surface.pixel(7, 4), Some(BACKGROUND));
        assert_eq!(surface.pixel(12, 7), Some(BACKGROUND));
        assert_eq!(surface.pixel(8, 8), Some(BACKGROUND));
    }

    #[test]
    fn test_paint_outside_is_ignored() {
        let mut surface = Surface::new(2, 2);
        surface.paint_cell(CellPos::new(2, 0), Some(RED));
        assert_eq!(surface.version(), 0);
    }

    #[test]
    fn test_repaint_from_grid_matches_grid() {
        let mut grid = PixelGrid::new(3);
        grid.set(0, 0, RED).unwrap();
        grid.set(2, 1, Color::BLACK).unwrap();

        let surface = Surface::from_grid(&grid, 2);
        for (pos, cell) in grid.cells() {
            let x = pos.col as u32 * 2;
            let y = pos.row as u32 * 2;
            assert_eq!(surface.pixel(x + 1, y + 1), Some(cell.unwrap_or(BACKGROUND)));
        }
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut surface = Surface::new(2, 1);
        let snapshot = surface.snapshot();
        surface.paint_all(Some(RED));
        assert_eq!(*snapshot.image().get_pixel(0, 0), Rgb([0xFF, 0xFF, 0xFF]));
    }
}
