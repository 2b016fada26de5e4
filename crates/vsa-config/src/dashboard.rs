//! Web dashboard configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8501
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Interface the dashboard binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the dashboard in the default browser after binding.
    #[serde(default)]
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: false,
        }
    }
}

impl DashboardConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
