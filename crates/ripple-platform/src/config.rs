use serde::Deserialize;

use crate::HostError;

/// Host settings, read from the `[host]` table of a TOML file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Terminal width used for truncation; `0` disables it.
    pub columns: usize,
    /// Append the inspector HUD line to every frame.
    pub inspector: bool,
    /// Upper bound on recompose passes triggered by a single event.
    pub max_recompose_passes: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            inspector: false,
            max_recompose_passes: 8,
        }
    }
}

impl HostConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, HostError> {
        Ok(toml::from_str(text)?)
    }
}
