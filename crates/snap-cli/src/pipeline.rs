//! Batch generation over a list of component files.
//!
//! Files are processed one at a time. A file that cannot be extracted,
//! rendered, or written is logged and counted as skipped; the batch goes on.

use std::path::{Path, PathBuf};

use snap_core::{Diagnostics, MetadataBuilder, PropExtractor};
use snap_render::TestWriter;

use crate::progress::Progress;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Generated files that went through the formatter.
    pub formatted: usize,
}

impl BatchReport {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "generated {} test file(s), skipped {}",
            self.generated.len(),
            self.skipped.len()
        )
    }
}

/// Message printed when the walk finds nothing to generate for.
#[must_use]
pub fn no_components_message(extensions: &[String]) -> String {
    let listed = extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join("/");
    format!("Did not find any {listed} files")
}

pub struct Pipeline<E> {
    builder: MetadataBuilder<E>,
    writer: TestWriter,
}

impl<E: PropExtractor> Pipeline<E> {
    pub const fn new(builder: MetadataBuilder<E>, writer: TestWriter) -> Self {
        Self { builder, writer }
    }

    /// Generate a test file for every file in `files`, all below `root`.
    pub fn run(&self, root: &Path, files: &[PathBuf], progress: &Progress) -> BatchReport {
        let mut report = BatchReport::default();

        for file in files {
            let relative = file.strip_prefix(root).unwrap_or(file);
            progress.set_message(&relative.display().to_string());

            let mut diagnostics = Diagnostics::new();
            let built = self.builder.build(file, relative, &mut diagnostics);
            progress.suspend(|| drain_diagnostics(&mut diagnostics));

            match built {
                Ok(model) => match self.writer.write(&model) {
                    Ok(outcome) => {
                        if outcome.formatted {
                            report.formatted += 1;
                        }
                        report.generated.push(outcome.path);
                    }
                    Err(error) => {
                        progress.suspend(|| {
                            tracing::error!(path = %relative.display(), %error, "Couldn't write test file");
                        });
                        report.skipped.push(file.clone());
                    }
                },
                Err(error) => {
                    progress.suspend(|| {
                        tracing::error!(path = %relative.display(), %error, "Couldn't extract props from file");
                    });
                    report.skipped.push(file.clone());
                }
            }
            progress.inc(1);
        }

        progress.finish_clear();
        report
    }
}

fn drain_diagnostics(diagnostics: &mut Diagnostics) {
    for diagnostic in diagnostics.drain() {
        tracing::warn!(prop = diagnostic.prop(), "{diagnostic}");
    }
}
