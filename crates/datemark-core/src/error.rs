//! Error types for the datemark watermarking pipeline.
//!
//! Errors are organized by stage to provide clear, actionable error messages
//! that include relevant context (file paths, stage names, specific issues).
//! Only the two batch-level conditions are fatal; every per-file condition
//! is isolated by the run loop.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for datemark operations.
#[derive(Error, Debug)]
pub enum DatemarkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// The input path does not exist; nothing was processed
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    /// A directory scan matched no supported image files
    #[error("No supported image files found in {0}")]
    NoFilesMatched(PathBuf),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-file pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Image opening or decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Re-encoding or writing the output image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Convenience type alias for datemark results.
pub type Result<T> = std::result::Result<T, DatemarkError>;

/// Convenience type alias for per-file pipeline results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
