//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, and quantizer errors, and provides semantic
//! variants for parameter validation and write failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("Cannot decode {path:?} as an image: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Quantizer error: {0}")]
    Quantize(#[from] imagequant::Error),

    #[error("Invalid parameter: {name}={value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Cannot write {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    pub fn invalid_parameter<V: std::fmt::Display>(name: &'static str, value: V) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
