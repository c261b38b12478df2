//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use snap_config::{FixtureEntry, SnapConfig};

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
components_path = "src/components"
prettify = true
template = "templates/enzyme.tera"
extensions = ["js", "jsx"]
skip_tests = false
"#,
        )?;

        let config: SnapConfig = Figment::from(Serialized::defaults(SnapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.components_path, "src/components");
        assert!(config.general.prettify);
        assert_eq!(config.general.template_path(), Some("templates/enzyme.tera"));
        assert_eq!(config.general.extensions, ["js", "jsx"]);
        assert!(!config.general.skip_tests);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[formatter]\ncommand = \"dprint\"\n")?;

        let config: SnapConfig = Figment::from(Serialized::defaults(SnapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.formatter.command, "dprint");
        assert!(config.formatter.args.iter().any(|a| a == "--single-quote"));
        assert_eq!(config.general.components_path, "./");
        Ok(())
    });
}

#[test]
fn loads_fixture_tables() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[[fixtures]]
type_name = "AppPropTypes.Invoice"
identifier = "invoice"
path = "app/testData/invoice.json"

[[fixtures]]
type_name = "RomanPropTypes.Order"
identifier = "order"
path = "local/order.json"
"#,
        )?;

        let config: SnapConfig = Figment::from(Serialized::defaults(SnapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.fixtures[0],
            FixtureEntry {
                type_name: "AppPropTypes.Invoice".into(),
                identifier: "invoice".into(),
                path: "app/testData/invoice.json".into(),
            }
        );
        let catalog = config.catalog();
        assert_eq!(
            catalog.lookup("RomanPropTypes.Order").map(|f| f.path.as_str()),
            Some("local/order.json")
        );
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file("snapgen.toml", "[general]\nextensions = [\"jsx\"]\n")?;

        let config = SnapConfig::load().expect("config loads");
        assert_eq!(config.general.extensions, ["jsx"]);
        Ok(())
    });
}

#[test]
fn invalid_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("snapgen.toml", "[general]\nprettify = \"sometimes\"\n")?;

        let err = SnapConfig::load().expect_err("bad bool");
        assert!(err.to_string().starts_with("Configuration error"), "{err}");
        Ok(())
    });
}
