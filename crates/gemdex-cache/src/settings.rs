use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveSettings {
    #[serde(default = "default_max_gems_per_query")]
    pub max_gems_per_query: usize,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            max_gems_per_query: default_max_gems_per_query(),
        }
    }
}

impl ResolveSettings {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).context("failed to parse resolve settings")
    }
}

fn default_max_gems_per_query() -> usize {
    250
}
