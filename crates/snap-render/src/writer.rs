//! Render, optionally format, and write one test file.

use std::path::{Path, PathBuf};

use snap_core::ComponentRenderModel;

use crate::error::RenderError;
use crate::format::Formatter;
use crate::template::TemplateEngine;

/// Result of writing one test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// `false` when formatting was off or the formatter failed.
    pub formatted: bool,
}

/// `src/Button.js` → `src/Button.test.js`.
#[must_use]
pub fn test_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map_or_else(|| "js".to_string(), |e| e.to_string_lossy().into_owned());
    source.with_file_name(format!("{stem}.test.{ext}"))
}

/// Writes a test file beside each component source.
pub struct TestWriter {
    engine: TemplateEngine,
    formatter: Option<Box<dyn Formatter + Send + Sync>>,
}

impl TestWriter {
    #[must_use]
    pub fn new(engine: TemplateEngine) -> Self {
        Self {
            engine,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + Send + Sync + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub const fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Render `model` and write it to its sibling test path.
    ///
    /// A formatter failure is logged and the unformatted text is written.
    ///
    /// # Errors
    /// Returns `RenderError::Template` if rendering fails and
    /// `RenderError::Io` if the file cannot be written.
    pub fn write(&self, model: &ComponentRenderModel) -> Result<WriteOutcome, RenderError> {
        let rendered = self.engine.render(model)?;
        let path = test_path_for(model.source_path());

        let (contents, formatted) = match &self.formatter {
            Some(formatter) => match formatter.format(&rendered, &path) {
                Ok(output) => (output, true),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "formatting failed, writing unformatted output"
                    );
                    (rendered, false)
                }
            },
            None => (rendered, false),
        };

        std::fs::write(&path, contents).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), formatted, "wrote test file");
        Ok(WriteOutcome { path, formatted })
    }
}
