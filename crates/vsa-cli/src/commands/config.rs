use vsa_config::VsaConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `vsa config`: print the effective configuration.
pub fn handle(config: &VsaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        print!("{}", render_toml(config)?);
        return Ok(());
    }
    output(config, flags.format)
}

fn render_toml(config: &VsaConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_has_every_section() {
        let out = render_toml(&VsaConfig::default()).unwrap();
        assert!(out.contains("[store]"));
        assert!(out.contains("[model]"));
        assert!(out.contains("[dashboard]"));
        assert!(out.contains("backend = \"modernbert-base\""));
    }

    #[test]
    fn toml_output_parses_back() {
        let out = render_toml(&VsaConfig::default()).unwrap();
        let parsed: VsaConfig = toml::from_str(&out).unwrap();
        assert_eq!(parsed.dashboard.port, 8501);
    }
}
