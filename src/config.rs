use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config_manager::system::SystemConfig;
use crate::config_manager::translation::TranslationConfig;
use crate::config_manager::utils::read_config_text;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JSON-LD context, tolerated and ignored
    #[serde(rename = "@context")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub translation_config: TranslationConfig,
}

impl Config {
    /// Load a config file; `.json`/`.jsonld` as JSON, anything else as YAML
    pub fn load(path: &str) -> Result<Self> {
        let content = read_config_text(path)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(&content).with_context(|| format!("Invalid JSON config: {}", path))
        } else {
            serde_yaml::from_str(&content).with_context(|| format!("Invalid YAML config: {}", path))
        }
    }

    /// Try each candidate path in order and return the first that loads
    pub fn discover() -> Result<(Self, String)> {
        let candidates = candidate_paths();

        for path in &candidates {
            match Self::load(path) {
                Ok(config) => return Ok((config, path.clone())),
                Err(e) => {
                    debug!("Failed to load config from {}: {:#}", path, e);
                }
            }
        }

        Err(anyhow::anyhow!(
            "Could not find config file. Tried: {:?}",
            candidates
        ))
    }
}

fn candidate_paths() -> Vec<String> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut paths: Vec<String> = std::env::var("CONFIG_PATH").ok().into_iter().collect();
    for name in ["conf.yaml", "conf.json", "conf.jsonld"] {
        paths.push(name.to_string());
        if let Some(p) = exe_dir.join(name).to_str() {
            paths.push(p.to_string());
        }
    }
    paths
}
