use egui::{PointerButton, Pos2, Rect, Response};

use crate::grid::CellPos;
use crate::state::PointerEvent;

/// Maps screen positions inside the canvas rect to grid cells.
///
/// One resolver covers the whole canvas: the cell index is the offset from the
/// canvas origin divided by the on-screen cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellResolver {
    rect: Rect,
    dimension: usize,
}

impl CellResolver {
    pub fn new(rect: Rect, dimension: usize) -> Self {
        Self { rect, dimension }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// On-screen size of one cell in points
    pub fn cell_size(&self) -> f32 {
        if self.dimension == 0 {
            0.0
        } else {
            self.rect.width() / self.dimension as f32
        }
    }

    pub fn resolve(&self, pos: Pos2) -> Option<CellPos> {
        let cell_size = self.cell_size();
        if cell_size <= 0.0 || !self.rect.contains(pos) {
            return None;
        }

        let last = self.dimension - 1;
        let col = (((pos.x - self.rect.min.x) / cell_size) as usize).min(last);
        let row = (((pos.y - self.rect.min.y) / cell_size) as usize).min(last);
        Some(CellPos::new(row, col))
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        let size = self.cell_size();
        let min = self.rect.min + egui::vec2(pos.col as f32 * size, pos.row as f32 * size);
        Rect::from_min_size(min, egui::vec2(size, size))
    }
}

/// Turns raw egui pointer input into [`PointerEvent`]s for the canvas.
///
/// Only the primary button draws. Moves produce an `Enter` only when the
/// pointer reaches a different cell.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_cell: Option<CellPos>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { last_cell: None }
    }

    /// Process this frame's egui input against the canvas widget.
    ///
    /// The pointer only counts while `response` owns it: a popup or window
    /// layered over the canvas hides the canvas from the pointer.
    pub fn process_input(&mut self, response: &Response, resolver: &CellResolver) -> Vec<PointerEvent> {
        let (pressed, released) = response.ctx.input(|input| {
            (
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.process_pointer(response.hover_pos(), resolver, pressed, released)
    }

    /// Like [`InputHandler::process_input`], with `owned_pos` the pointer
    /// position when the canvas owns the pointer and `None` otherwise
    pub fn process_pointer(
        &mut self,
        owned_pos: Option<Pos2>,
        resolver: &CellResolver,
        pressed: bool,
        released: bool,
    ) -> Vec<PointerEvent> {
        let cell = owned_pos.and_then(|pos| resolver.resolve(pos));
        self.translate(cell, pressed, released)
    }

    /// Translates one frame of pointer state into events.
    ///
    /// `cell` is the cell under the pointer, or `None` when it is off the canvas.
    pub fn translate(&mut self, cell: Option<CellPos>, pressed: bool, released: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if cell.is_none() && self.last_cell.is_some() {
            events.push(PointerEvent::Leave);
        }

        match cell {
            Some(cell) if pressed => events.push(PointerEvent::Press(cell)),
            Some(cell) if self.last_cell != Some(cell) => events.push(PointerEvent::Enter(cell)),
            _ => {}
        }

        if released {
            events.push(PointerEvent::Release);
        }

        self.last_cell = cell;
        events
    }
}
