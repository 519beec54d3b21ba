// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = SkillmapError> = std::result::Result<T, E>;

/// Failures of the collaborators around the pipeline (I/O, config, exports).
/// Normalization, aggregation and ranking never fail.
#[derive(Debug, Error)]
pub enum SkillmapError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("source directory not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl From<figment::Error> for SkillmapError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}
