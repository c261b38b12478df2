//! Cross-cutting error types for snapgen.
//!
//! Parser-specific errors live in `snap-parser` and rendering errors in
//! `snap-render`. Everything that stops a single component file from being
//! modelled converges here as [`CoreError`], which the batch driver logs and
//! skips.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning one source file into a render model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The extractor could not recognize the file as a component definition.
    #[error("{path} is not a component: {message}")]
    Parse { path: PathBuf, message: String },

    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Parse { path, .. } | Self::Io { path, .. } => path,
        }
    }
}
