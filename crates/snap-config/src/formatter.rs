//! External formatter command.

use serde::{Deserialize, Serialize};

fn default_command() -> String {
    "prettier".to_string()
}

fn default_args() -> Vec<String> {
    [
        "--stdin-filepath",
        "{path}",
        "--single-quote",
        "--trailing-comma",
        "all",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatterConfig {
    /// Program to run; source is piped through stdin and read from stdout.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments; `{path}` is replaced by the output file path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}
