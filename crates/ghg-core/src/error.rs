// File: crates/ghg-core/src/error.rs
// Summary: Error types for configuration, the data pipeline and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline failures. Any of these skips both charts.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch {resource}")]
    Fetch {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {resource}")]
    Parse {
        resource: String,
        #[source]
        source: csv::Error,
    },

    #[error("{resource} is missing required column `{column}`")]
    MissingColumn { resource: String, column: String },
}

impl PipelineError {
    /// Name of the resource that failed, for user-visible messages.
    pub fn resource(&self) -> &str {
        match self {
            Self::Fetch { resource, .. }
            | Self::Parse { resource, .. }
            | Self::MissingColumn { resource, .. } => resource,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid year range: start {start} is after end {end}")]
    YearRange { start: i32, end: i32 },
}

/// A color string that is not `#rrggbb`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color `{0}`, expected #rrggbb")]
pub struct InvalidColor(pub String);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("failed to encode PNG")]
    Encode,

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
pub type RenderResult<T> = Result<T, RenderError>;
