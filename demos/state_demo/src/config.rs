use std::path::Path;

use anyhow::Context;
use ripple_platform::{HostConfig, HostError};
use serde::Deserialize;

/// Contents of the demo's TOML config file.
///
/// ```toml
/// local_owners = 2
///
/// [host]
/// columns = 60
/// inspector = true
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// How many independent local-state owners to mount.
    pub local_owners: usize,
    pub host: HostConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            local_owners: 1,
            host: HostConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, HostError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
