use serde::{Deserialize, Serialize};

fn default_primary_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_primary_timeout() -> u64 {
    15
}

fn default_secondary_url() -> String {
    "https://libretranslate.com/translate".to_string()
}

fn default_secondary_timeout() -> u64 {
    10
}

/// Paid provider tried first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryProviderConfig {
    /// Empty means "not configured"; the tier is then skipped
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_primary_url")]
    pub api_url: String,

    #[serde(default = "default_primary_timeout")]
    pub timeout_secs: u64,
}

impl Default for PrimaryProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_primary_url(),
            timeout_secs: default_primary_timeout(),
        }
    }
}

/// Free provider tried when the primary fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryProviderConfig {
    #[serde(default = "default_secondary_url")]
    pub api_url: String,

    #[serde(default = "default_secondary_timeout")]
    pub timeout_secs: u64,
}

impl Default for SecondaryProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_secondary_url(),
            timeout_secs: default_secondary_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfflineDictionaryConfig {
    /// JSON file with extra entries merged over the bundled table
    #[serde(default)]
    pub extra_entries_path: Option<String>,
}

/// Configuration for the translation waterfall
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub primary: PrimaryProviderConfig,

    #[serde(default)]
    pub secondary: SecondaryProviderConfig,

    #[serde(default)]
    pub offline: OfflineDictionaryConfig,
}
