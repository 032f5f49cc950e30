use thiserror::Error;

/// Errors raised by the pixel grid when a coordinate falls outside of it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside of the {dimension}x{dimension} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },
}

/// A color string that is not `#RRGGBB` or `#RGB`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected #RRGGBB or #RGB")]
pub struct ColorParseError {
    pub input: String,
}

/// Errors that can occur while producing or delivering an exported image.
///
/// None of these are fatal: the editor reports them and keeps its state.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("the surface has no pixels to export")]
    EmptySurface,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("export was dropped before it completed")]
    Cancelled,
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
