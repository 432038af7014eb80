use thiserror::Error;

/// Errors produced while parsing a color string such as `"#ff0000"`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),

    #[error("Color must be #RRGGBB or #AARRGGBB, got {len} hex digits: {input}")]
    InvalidLength { input: String, len: usize },

    #[error("Invalid hex digits in color: {0}")]
    InvalidDigits(String),
}

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Canvas has no pixels to export")]
    EmptyCanvas,
}

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
