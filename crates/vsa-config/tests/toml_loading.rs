//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use vsa_config::VsaConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "/var/lib/vsa/history.db"
history_limit = 25

[model]
backend = "modernbert-large"
fallback = false
cache_dir = "/opt/models"
max_length = 256

[dashboard]
host = "0.0.0.0"
port = 9000
open_browser = true
"#,
        )?;

        let config: VsaConfig = Figment::from(Serialized::defaults(VsaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, "/var/lib/vsa/history.db");
        assert_eq!(config.store.history_limit, 25);
        assert_eq!(config.model.backend, "modernbert-large");
        assert!(!config.model.fallback);
        assert_eq!(config.model.cache_dir, "/opt/models");
        assert_eq!(config.model.max_length, 256);
        assert_eq!(config.dashboard.bind_addr(), "0.0.0.0:9000");
        assert!(config.dashboard.open_browser);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[model]
backend = "modernbert-large"
"#,
        )?;

        let config: VsaConfig = Figment::from(Serialized::defaults(VsaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.model.backend, "modernbert-large");
        assert!(config.model.fallback);
        assert_eq!(config.store.path, "data/sentiment_history.db");
        assert_eq!(config.dashboard.port, 8501);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".vsa")).expect("create .vsa");
        jail.create_file(
            ".vsa/config.toml",
            r#"
[store]
path = "project.db"
"#,
        )?;

        let config = VsaConfig::load().expect("config loads");
        assert_eq!(config.store.path, "project.db");
        Ok(())
    });
}

#[test]
fn invalid_value_in_project_config_fails_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".vsa")).expect("create .vsa");
        jail.create_file(
            ".vsa/config.toml",
            r#"
[store]
history_limit = 0
"#,
        )?;

        let err = VsaConfig::load().expect_err("zero limit should be rejected");
        assert!(err.to_string().contains("store.history_limit"));
        Ok(())
    });
}
