//! Interactive components path prompt.

use std::path::PathBuf;

use anyhow::Context;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::ui;

pub const COMPONENTS_PATH_PROMPT: &str = "Give me the path to components please !";

/// Resolve the components directory.
///
/// An explicit path wins. Otherwise the user is asked when stdin is a
/// terminal, and `default` is used as is when it is not.
pub fn components_path(explicit: Option<&str>, default: &str) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }
    if !ui::prefs().interactive {
        tracing::debug!(default, "stdin is not a terminal, using configured components path");
        return Ok(PathBuf::from(default));
    }

    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(COMPONENTS_PATH_PROMPT)
        .default(default.to_string())
        .interact_text()
        .context("failed to read components path")?;
    Ok(PathBuf::from(answer.trim()))
}
