//! Post-render formatting through an external command.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::FormatError;

/// Placeholder in formatter arguments replaced by the output file path.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Rewrites rendered source text before it is written.
pub trait Formatter {
    /// Format `source`, which is about to be written to `path`.
    ///
    /// # Errors
    /// Returns [`FormatError`] when no formatted text could be produced.
    fn format(&self, source: &str, path: &Path) -> Result<String, FormatError>;
}

/// Pipes source through a program's stdin and reads the result from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    command: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// `prettier --stdin-filepath {path} --single-quote --trailing-comma all`.
    #[must_use]
    pub fn prettier() -> Self {
        Self::new(
            "prettier",
            [
                "--stdin-filepath",
                PATH_PLACEHOLDER,
                "--single-quote",
                "--trailing-comma",
                "all",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments with the path placeholder substituted.
    #[must_use]
    pub fn args_for(&self, path: &Path) -> Vec<String> {
        let path = path.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect()
    }
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::prettier()
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, source: &str, path: &Path) -> Result<String, FormatError> {
        let spawn_error = |source| FormatError::Spawn {
            command: self.command.clone(),
            source,
        };

        let mut child = Command::new(&self.command)
            .args(self.args_for(path))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // A formatter may exit before reading all input; its status reports that.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(error) = stdin.write_all(source.as_bytes())
            && error.kind() != ErrorKind::BrokenPipe
        {
            return Err(spawn_error(error));
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput {
            command: self.command.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prettier_args_substitute_path() {
        let formatter = CommandFormatter::prettier();
        assert_eq!(formatter.command(), "prettier");
        assert_eq!(
            formatter.args_for(Path::new("src/Card.test.js")),
            [
                "--stdin-filepath",
                "src/Card.test.js",
                "--single-quote",
                "--trailing-comma",
                "all"
            ]
        );
    }

    #[test]
    fn placeholder_inside_argument_is_replaced() {
        let formatter = CommandFormatter::new("dprint", vec!["--stdin={path}".into()]);
        assert_eq!(formatter.args_for(Path::new("a.js")), ["--stdin=a.js"]);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let formatter = CommandFormatter::new("snapgen-no-such-formatter", Vec::new());
        let err = formatter
            .format("const a = 1;", Path::new("a.test.js"))
            .expect_err("missing program");
        assert!(matches!(err, FormatError::Spawn { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn cat_passes_source_through() {
        let formatter = CommandFormatter::new("cat", Vec::new());
        let out = formatter
            .format("const a = 1;\n", Path::new("a.test.js"))
            .expect("cat");
        assert_eq!(out, "const a = 1;\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failed() {
        let formatter = CommandFormatter::new("false", Vec::new());
        let err = formatter
            .format("x", Path::new("a.test.js"))
            .expect_err("false exits 1");
        assert!(matches!(err, FormatError::Failed { .. }), "{err}");
    }
}
