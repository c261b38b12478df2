//! General generation settings.

use serde::{Deserialize, Serialize};

fn default_components_path() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

const fn default_skip_tests() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Root directory scanned for components; also the prompt default.
    #[serde(default = "default_components_path")]
    pub components_path: String,

    /// Run generated files through the formatter.
    #[serde(default)]
    pub prettify: bool,

    /// Custom template path; empty means the builtin template.
    #[serde(default)]
    pub template: String,

    /// File extensions (without dot) treated as component sources.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Leave `*.test.*`, `*.spec.*` and `__tests__` alone.
    #[serde(default = "default_skip_tests")]
    pub skip_tests: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            components_path: default_components_path(),
            prettify: false,
            template: String::new(),
            extensions: default_extensions(),
            skip_tests: default_skip_tests(),
        }
    }
}

impl GeneralConfig {
    /// Custom template path, if one is configured.
    pub fn template_path(&self) -> Option<&str> {
        let trimmed = self.template.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.components_path, "./");
        assert!(!config.prettify);
        assert!(config.template.is_empty());
        assert_eq!(config.extensions, ["js"]);
        assert!(config.skip_tests);
    }

    #[test]
    fn blank_template_means_builtin() {
        let mut config = GeneralConfig::default();
        assert_eq!(config.template_path(), None);
        config.template = "  ".into();
        assert_eq!(config.template_path(), None);
        config.template = "templates/custom.tera".into();
        assert_eq!(config.template_path(), Some("templates/custom.tera"));
    }
}
