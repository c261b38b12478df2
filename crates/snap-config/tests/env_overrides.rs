//! Environment variable precedence, sandboxed with `figment::Jail`.

use figment::Jail;
use snap_config::SnapConfig;

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("SNAPGEN_GENERAL__PRETTIFY", "true");

        let config = SnapConfig::load().expect("config loads");
        assert!(config.general.prettify);
        Ok(())
    });
}

#[test]
fn env_var_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "snapgen.toml",
            "[general]\ncomponents_path = \"from-file\"\n",
        )?;
        jail.set_env("SNAPGEN_GENERAL__COMPONENTS_PATH", "from-env");

        let config = SnapConfig::load().expect("config loads");
        assert_eq!(config.general.components_path, "from-env");
        Ok(())
    });
}

#[test]
fn env_var_sets_list_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SNAPGEN_GENERAL__EXTENSIONS", "[js, jsx]");

        let config = SnapConfig::load().expect("config loads");
        assert_eq!(config.general.extensions, ["js", "jsx"]);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_break_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("SNAPGEN_LOG", "debug");

        let config = SnapConfig::load().expect("config loads");
        assert_eq!(config.formatter.command, "prettier");
        Ok(())
    });
}

#[test]
fn dotenv_file_in_current_dir_is_loaded() {
    Jail::expect_with(|jail| {
        // dotenvy writes the process env, so only this test reads `template`.
        jail.create_file(".env", "SNAPGEN_GENERAL__TEMPLATE=from-dotenv.tera\n")?;

        let config = SnapConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.template_path(), Some("from-dotenv.tera"));
        Ok(())
    });
}
