use crate::config::EditorConfig;
use crate::event::{EditorEvent, ExportEvent};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The eframe application: the UI shell around an [`EditorContext`].
///
/// Nothing here is persisted between runs; every launch starts with a blank canvas.
pub struct PixelArtApp {
    pub(crate) editor: EditorContext,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    /// Value shown by the custom color picker, kept in step with the editor color
    pub(crate) custom_color: egui::Color32,
    /// Outcome of the most recent export, for the status line
    pub(crate) status: Option<String>,
}

impl Default for PixelArtApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PixelArtApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = EditorContext::new(config);
        let custom_color = editor.color().into();
        Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            custom_color,
            status: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Reflects editor events in the UI state
    pub fn handle_events(&mut self) {
        for event in self.editor.drain_events() {
            match event {
                EditorEvent::ColorChanged { new, .. } => {
                    self.custom_color = new.into();
                }
                EditorEvent::CanvasCleared => {
                    self.status = Some("Canvas cleared".to_owned());
                }
                EditorEvent::ExportEvent(ExportEvent::Ready { location, .. }) => {
                    self.status = Some(format!("Saved {}", location));
                }
                EditorEvent::ExportEvent(ExportEvent::Failed { reason, .. }) => {
                    self.status = Some(format!("Error exporting canvas: {}. Please try again.", reason));
                }
                // Highlights are read straight from the editor each frame
                EditorEvent::ToolChanged { .. } | EditorEvent::ExportEvent(ExportEvent::Started { .. }) => {}
            }
        }
    }
}

impl eframe::App for PixelArtApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.editor.poll_exports();

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.handle_events();

        // Keep polling while an encode is running in the background
        if self.editor.exports_in_flight() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
