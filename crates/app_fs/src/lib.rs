//! Portfolio Viewer file system layer
//!
//! Produces the image catalog the gallery works on: a single scan of the
//! images directory, filtered to supported, tag-bearing file names and
//! sorted, handed over once before the UI starts.

mod catalog_source;

pub use catalog_source::{
    has_supported_extension, has_tag_separator, list_catalog, CatalogOptions,
    SUPPORTED_EXTENSIONS,
};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, FsError>;
