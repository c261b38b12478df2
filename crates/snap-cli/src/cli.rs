use clap::Parser;
use snap_config::SnapConfig;

/// Top-level CLI parser for the `snapgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "snapgen",
    version,
    about = "Generate enzyme snapshot tests for React components"
)]
pub struct Cli {
    /// Components directory (skips the interactive prompt)
    #[arg(value_name = "COMPONENTS_PATH")]
    pub components_path: Option<String>,

    /// Run generated tests through the configured formatter
    #[arg(long, alias = "pr")]
    pub prettify: bool,

    /// Custom tera template for generated tests
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<String>,

    /// Quiet mode (errors only, no progress or summary)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line flags over loaded configuration.
    pub fn apply(&self, config: &mut SnapConfig) {
        if self.prettify {
            config.general.prettify = true;
        }
        if let Some(template) = &self.template {
            config.general.template.clone_from(template);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["snapgen"]).expect("cli should parse");
        let mut config = SnapConfig::default();
        cli.apply(&mut config);
        assert!(!config.general.prettify);
        assert_eq!(config.general.template_path(), None);
        assert_eq!(cli.components_path, None);
    }

    #[test]
    fn pr_alias_enables_prettify() {
        let cli = Cli::try_parse_from(["snapgen", "--pr"]).expect("cli should parse");
        assert!(cli.prettify);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["snapgen", "--prettify", "-t", "my.tera", "src"])
            .expect("cli should parse");
        let mut config = SnapConfig::default();
        cli.apply(&mut config);
        assert!(config.general.prettify);
        assert_eq!(config.general.template_path(), Some("my.tera"));
        assert_eq!(cli.components_path.as_deref(), Some("src"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["snapgen", "-q", "-v"]).is_err());
    }
}
