use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DepclosureConfig {
    pub format: Option<OutputFormat>,
    pub pattern: Option<String>,
    pub data_dir: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("depclosure.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<DepclosureConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DepclosureConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
