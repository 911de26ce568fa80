//! Error types for jst-zh-footprints.

use std::path::PathBuf;

use thiserror::Error;

use crate::kicad::KicadError;

/// Result type for footprint generation.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while generating footprints.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Requested pin count is outside the series range.
    #[error("pin count {pins} is outside the supported range {min}..={max}")]
    PinCountOutOfRange {
        /// Requested pin count.
        pins: u32,
        /// Smallest supported pin count.
        min: u32,
        /// Largest supported pin count.
        max: u32,
    },

    /// A name template could not be expanded.
    #[error("invalid name template '{template}': {message}")]
    Template {
        /// The template text.
        template: String,
        /// Description of what's wrong.
        message: String,
    },

    /// Building or writing the footprint failed.
    #[error(transparent)]
    Kicad(#[from] KicadError),
}
