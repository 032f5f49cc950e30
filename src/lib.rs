#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tool;
pub mod util;

pub use app::PixelArtApp;
pub use color::{Color, NamedColor};
pub use config::EditorConfig;
pub use error::{ColorParseError, ConfigError, ExportError, GridError};
pub use event::{EditorEvent, ExportEvent};
pub use export::{Artifact, ExportSettings, Snapshot};
pub use grid::{Cell, CellPos, PixelGrid};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState, PointerEvent, Repaint, ToolController};
pub use surface::Surface;
pub use tool::{FillMode, Tool};
