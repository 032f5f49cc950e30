use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::{ColorParseError, GridError};
use crate::event::{EditorEvent, EventBus, ExportEvent, LogEventHandler};
use crate::export::{self, ExportResult, ExportSettings, ExportTask};
use crate::grid::{CellPos, PixelGrid};
use crate::surface::Surface;
use crate::tool::{FillMode, Tool};

use super::{EditorState, PointerEvent, Repaint, ToolController};

/// The pixel editor: the single owner of everything the UI shell talks to.
///
/// `EditorContext` holds the grid, its render surface, the tool controller and
/// the event bus. It is constructed explicitly from an [`EditorConfig`] and
/// owned by the application; there is no global instance.
///
/// Every mutating operation keeps the surface in step with the grid and emits
/// an [`EditorEvent`] describing what the UI should reflect.
///
/// # Example
///
/// ```rust
/// use eframe_pixel_art::{CellPos, Color, EditorConfig, EditorContext, PointerEvent, Tool};
///
/// let mut editor = EditorContext::new(EditorConfig::default());
/// editor.select_tool(Tool::Pen);
/// editor.select_color(Color::rgb(0, 255, 0));
///
/// editor.handle_pointer(PointerEvent::Press(CellPos::new(2, 2))).unwrap();
/// editor.handle_pointer(PointerEvent::Release).unwrap();
///
/// assert_eq!(editor.grid().get(2, 2).unwrap(), Some(Color::rgb(0, 255, 0)));
/// ```
#[derive(Debug)]
pub struct EditorContext {
    config: EditorConfig,
    grid: PixelGrid,
    surface: Surface,
    controller: ToolController,
    event_bus: EventBus,
    exports: Vec<ExportTask>,
    next_export_id: u64,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    /// Creates an editor with a blank canvas. Events are logged through `log`.
    ///
    /// A config that fails [`EditorConfig::validate`] is replaced by the defaults.
    pub fn new(config: EditorConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::error!("{}; falling back to the default config", err);
                EditorConfig::default()
            }
        };
        let grid = PixelGrid::new(config.dimension);
        let surface = Surface::new(config.dimension, config.cell_size);
        let controller = ToolController::from_config(&config);

        let event_bus = EventBus::new();
        event_bus.subscribe(Box::new(LogEventHandler));

        log::info!(
            "Created {0}x{0} canvas, {1}px per cell",
            config.dimension,
            config.cell_size
        );

        Self {
            config,
            grid,
            surface,
            controller,
            event_bus,
            exports: Vec::new(),
            next_export_id: 1,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn tool(&self) -> Tool {
        self.controller.tool()
    }

    pub fn color(&self) -> Color {
        self.controller.color()
    }

    pub fn state(&self) -> EditorState {
        self.controller.state()
    }

    pub fn fill_mode(&self) -> FillMode {
        self.controller.fill_mode()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let old = self.controller.select_tool(tool);
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    pub fn select_color(&mut self, color: Color) {
        let old = self.controller.select_color(color);
        self.event_bus.emit(EditorEvent::ColorChanged { old, new: color });
    }

    /// Selects a color typed or picked as a hex string. Invalid input leaves the current color.
    pub fn select_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        let color = Color::from_hex(hex)?;
        self.select_color(color);
        Ok(())
    }

    /// Feeds one pointer event through the tool state machine and repaints what changed
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<Option<Repaint>, GridError> {
        let repaint = self.controller.handle_pointer(event, &mut self.grid)?;
        if let Some(repaint) = repaint {
            self.surface.apply(repaint, &self.grid);
        }
        Ok(repaint)
    }

    /// Applies the active tool to one cell, outside of any pointer gesture
    pub fn apply_tool_at(&mut self, pos: CellPos) -> Result<Repaint, GridError> {
        let repaint = self.controller.apply_tool_at(pos, &mut self.grid)?;
        self.surface.apply(repaint, &self.grid);
        Ok(repaint)
    }

    pub fn clear_canvas(&mut self) {
        self.grid.clear_all();
        self.surface.apply(Repaint::Fill(None), &self.grid);
        self.event_bus.emit(EditorEvent::CanvasCleared);
    }

    /// Starts exporting the surface as it is right now. Returns the export id.
    ///
    /// The result arrives later through [`EditorContext::poll_exports`].
    pub fn request_export(&mut self) -> u64 {
        let settings = ExportSettings::from_config(&self.config);
        self.request_export_with(settings)
    }

    pub fn request_export_with(&mut self, settings: ExportSettings) -> u64 {
        let id = self.next_export_id;
        self.next_export_id += 1;

        let task = export::spawn_export(id, self.surface.snapshot(), settings);
        self.exports.push(task);
        self.event_bus.emit(EditorEvent::ExportEvent(ExportEvent::Started { id }));
        id
    }

    pub fn exports_in_flight(&self) -> usize {
        self.exports.len()
    }

    /// Collects finished exports and reports them. Returns how many finished.
    pub fn poll_exports(&mut self) -> usize {
        let mut finished = Vec::new();
        self.exports.retain_mut(|task| match task.poll() {
            Some(result) => {
                finished.push((task.id(), result));
                false
            }
            None => true,
        });

        for (id, result) in &finished {
            self.report_export(*id, result);
        }
        finished.len()
    }

    /// Blocks until every export in flight has finished, then reports them
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_for_exports(&mut self) -> usize {
        let tasks = std::mem::take(&mut self.exports);
        let finished = tasks.len();
        for task in tasks {
            let id = task.id();
            let result = task.wait();
            self.report_export(id, &result);
        }
        finished
    }

    fn report_export(&self, id: u64, result: &ExportResult) {
        let event = match result {
            Ok(delivered) => ExportEvent::Ready {
                id,
                file_name: delivered.artifact.file_name.clone(),
                location: delivered.location.clone(),
            },
            Err(err) => ExportEvent::Failed {
                id,
                reason: err.to_string(),
            },
        };
        self.event_bus.emit(EditorEvent::ExportEvent(event));
    }

    /// Takes the events emitted since the last call
    pub fn drain_events(&self) -> Vec<EditorEvent> {
        self.event_bus.drain()
    }
}
