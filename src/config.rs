use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{Color, NamedColor, default_palette};
use crate::error::ConfigError;
use crate::grid::DEFAULT_DIMENSION;
use crate::tool::{FillMode, Tool};

pub const DEFAULT_CELL_SIZE: u32 = 16;
pub const DEFAULT_EXPORT_SIZE: u32 = 512;
pub const DEFAULT_EXPORT_QUALITY: f32 = 0.9;

/// Largest raster side, in pixels, for both the render surface and exports
pub const MAX_IMAGE_SIDE: u32 = 8192;
/// Largest grid side, in cells
pub const MAX_DIMENSION: usize = 1024;

/// Environment variable naming a JSON config file to load on startup
pub const CONFIG_ENV_VAR: &str = "PIXEL_ART_CONFIG";

/// Editor settings, fixed once the editor is constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct EditorConfig {
    /// Number of cells along each side of the square grid
    pub dimension: usize,
    /// Surface pixels per cell along each axis
    pub cell_size: u32,
    pub initial_tool: Tool,
    /// Starting color. When absent, the first palette entry is used.
    pub initial_color: Option<Color>,
    pub palette: Vec<NamedColor>,
    /// Side length in pixels of the exported image
    pub export_size: u32,
    /// JPEG quality in (0, 1]
    pub export_quality: f32,
    pub fill_mode: FillMode,
    /// Where exported files are written on native. Defaults to the user's
    /// download directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            cell_size: DEFAULT_CELL_SIZE,
            initial_tool: Tool::Pen,
            initial_color: None,
            palette: default_palette(),
            export_size: DEFAULT_EXPORT_SIZE,
            export_quality: DEFAULT_EXPORT_QUALITY,
            fill_mode: FillMode::WholeCanvas,
            export_dir: None,
        }
    }
}

impl EditorConfig {
    pub fn starting_color(&self) -> Color {
        self.initial_color
            .or_else(|| self.palette.first().map(|entry| entry.color))
            .unwrap_or(Color::BLACK)
    }

    /// Side length of the render surface in pixels, or `None` when it does not fit in a `u32`
    pub fn surface_size(&self) -> Option<u32> {
        u32::try_from(self.dimension)
            .ok()
            .and_then(|dimension| dimension.checked_mul(self.cell_size))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 || self.dimension > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "dimension must be in 1..={MAX_DIMENSION}, got {}",
                self.dimension
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be at least 1".to_owned()));
        }
        match self.surface_size() {
            Some(side) if side <= MAX_IMAGE_SIDE => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "dimension x cell_size must not exceed {MAX_IMAGE_SIDE} pixels"
                )));
            }
        }
        if self.export_size == 0 || self.export_size > MAX_IMAGE_SIDE {
            return Err(ConfigError::Invalid(format!(
                "export_size must be in 1..={MAX_IMAGE_SIDE}, got {}",
                self.export_size
            )));
        }
        if !(self.export_quality > 0.0 && self.export_quality <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "export_quality must be in (0, 1], got {}",
                self.export_quality
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }
}
