//! Error types for annotation format operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading COCO annotations or writing VOC files.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The annotation file could not be opened or read
    #[error("Failed to read annotation file {path:?}: {source}")]
    ReadAnnotations {
        /// Path of the annotation file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output directory or file could not be written
    #[error("Failed to write {path:?}: {source}")]
    WriteOutput {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a stream other than the annotation or output files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid format structure or content
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// Image ID requested but not present in the index
    #[error("Image not found: {id}")]
    ImageNotFound {
        /// The missing image ID
        id: u64,
    },

    /// Annotation ID requested but not present in the index
    #[error("Annotation not found: {id}")]
    AnnotationNotFound {
        /// The missing annotation ID
        id: u64,
    },

    /// Category ID requested but not present in the index
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The missing category ID
        id: u32,
    },
}

impl FormatError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a read error for the annotation file at `path`.
    pub fn read_annotations(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadAnnotations {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the output at `path`.
    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
