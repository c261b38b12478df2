//! Render and write errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A formatter run that did not produce usable output.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to run formatter '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter '{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("formatter '{command}' produced non-UTF-8 output")]
    InvalidOutput { command: String },
}
