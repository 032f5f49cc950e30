use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::GridError;
use crate::grid::{Cell, CellPos, PixelGrid};
use crate::tool::{FillMode, Tool};

use super::EditorState;

/// Pointer input over the grid, already resolved to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button went down over a cell
    Press(CellPos),
    /// Pointer moved onto a different cell
    Enter(CellPos),
    /// Primary button went up
    Release,
    /// Pointer left the canvas
    Leave,
}

/// What part of the surface has to be redrawn after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// One cell, with `None` meaning the background
    Cell { pos: CellPos, color: Cell },
    /// The whole surface in a single color, with `None` meaning the background
    Fill(Cell),
    /// Redraw everything from the grid
    Grid,
}

/// Holds the active tool and color, and turns pointer gestures into grid mutations
#[derive(Debug, Clone)]
pub struct ToolController {
    tool: Tool,
    color: Color,
    state: EditorState,
    fill_mode: FillMode,
}

impl ToolController {
    pub fn new(tool: Tool, color: Color, fill_mode: FillMode) -> Self {
        Self {
            tool,
            color,
            state: EditorState::Idle,
            fill_mode,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.initial_tool, config.starting_color(), config.fill_mode)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Switches tools. Returns the previously active tool.
    pub fn select_tool(&mut self, tool: Tool) -> Tool {
        std::mem::replace(&mut self.tool, tool)
    }

    /// Switches colors. Returns the previously active color.
    pub fn select_color(&mut self, color: Color) -> Color {
        std::mem::replace(&mut self.color, color)
    }

    /// Advances the state machine and applies the active tool where the gesture calls for it
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        grid: &mut PixelGrid,
    ) -> Result<Option<Repaint>, GridError> {
        match event {
            PointerEvent::Press(pos) => {
                // Only a press over a real cell starts a session
                let repaint = self.apply_tool_at(pos, grid)?;
                self.state = EditorState::Drawing;
                Ok(Some(repaint))
            }
            PointerEvent::Enter(pos) if self.state.is_drawing() => {
                self.apply_tool_at(pos, grid).map(Some)
            }
            PointerEvent::Enter(_) => Ok(None),
            PointerEvent::Release | PointerEvent::Leave => {
                self.state = EditorState::Idle;
                Ok(None)
            }
        }
    }

    /// Applies the active tool to one cell, regardless of the drawing state
    pub fn apply_tool_at(&self, pos: CellPos, grid: &mut PixelGrid) -> Result<Repaint, GridError> {
        let CellPos { row, col } = pos;
        match self.tool {
            Tool::Pen => {
                grid.set(row, col, self.color)?;
                Ok(Repaint::Cell {
                    pos,
                    color: Some(self.color),
                })
            }
            Tool::Eraser => {
                grid.clear(row, col)?;
                Ok(Repaint::Cell { pos, color: None })
            }
            Tool::Fill => match self.fill_mode {
                FillMode::WholeCanvas => {
                    // The clicked cell does not matter, but it still has to be on the canvas
                    grid.get(row, col)?;
                    grid.fill_all(self.color);
                    Ok(Repaint::Fill(Some(self.color)))
                }
                FillMode::Contiguous => {
                    grid.flood_fill(row, col, self.color)?;
                    Ok(Repaint::Grid)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color = Color::rgb(0, 0xFF, 0);

    #[test]
    fn test_out_of_range_press_stays_idle() {
        let mut grid = PixelGrid::new(4);
        let mut controller = ToolController::new(Tool::Pen, GREEN, FillMode::WholeCanvas);
        let result = controller.handle_pointer(PointerEvent::Press(CellPos::new(4, 0)), &mut grid);
        assert!(result.is_err());
        assert_eq!(controller.state(), EditorState::Idle);
        assert_eq!(grid.painted_count(), 0);
    }

    #[test]
    fn test_select_returns_previous() {
        let mut controller = ToolController::new(Tool::Pen, GREEN, FillMode::WholeCanvas);
        assert_eq!(controller.select_tool(Tool::Fill), Tool::Pen);
        assert_eq!(controller.select_color(Color::WHITE), GREEN);
        assert_eq!(controller.tool(), Tool::Fill);
        assert_eq!(controller.color(), Color::WHITE);
    }

    #[test]
    fn test_contiguous_fill_requests_grid_repaint() {
        let mut grid = PixelGrid::new(3);
        grid.set(1, 0, Color::BLACK).unwrap();
        grid.set(1, 1, Color::BLACK).unwrap();
        grid.set(1, 2, Color::BLACK).unwrap();

        let controller = ToolController::new(Tool::Fill, GREEN, FillMode::Contiguous);
        let repaint = controller.apply_tool_at(CellPos::new(0, 0), &mut grid).unwrap();
        assert_eq!(repaint, Repaint::Grid);
        assert_eq!(grid.get(0, 2).unwrap(), Some(GREEN));
        assert_eq!(grid.get(2, 2).unwrap(), None);
    }
}
