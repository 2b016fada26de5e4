use crate::cli::GlobalFlags;

/// Load configuration (`.env`, TOML layers, `VSA_*` env) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<vsa_config::VsaConfig> {
    let mut config = vsa_config::VsaConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

/// `--db` and `--model` take precedence over every config layer.
pub fn apply_overrides(config: &mut vsa_config::VsaConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.store.path.clone_from(db);
    }
    if let Some(model) = &flags.model {
        config.model.backend.clone_from(model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;

    fn flags(db: Option<&str>, model: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            verbose: false,
            model: model.map(str::to_string),
            db: db.map(str::to_string),
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = vsa_config::VsaConfig::default();
        apply_overrides(&mut config, &flags(Some("/tmp/x.db"), Some("modernbert-large")));
        assert_eq!(config.store.path, "/tmp/x.db");
        assert_eq!(config.model.backend, "modernbert-large");
    }

    #[test]
    fn absent_overrides_keep_config() {
        let mut config = vsa_config::VsaConfig::default();
        apply_overrides(&mut config, &flags(None, None));
        assert_eq!(config.store.path, "data/sentiment_history.db");
        assert_eq!(config.model.backend, "modernbert-base");
    }
}
