use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::deepl::DeepLTranslator;
use super::dictionary::OfflineDictionary;
use super::language_codes::LanguageCodeMap;
use super::libre::LibreTranslator;
use super::resolver::TranslationResolver;
use crate::config_manager::translation::TranslationConfig;

/// Factory for building the translation waterfall from configuration
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build a resolver with the bundled code map and dictionary, plus any
    /// extra dictionary entries named in the config.
    pub fn create_resolver(config: &TranslationConfig) -> Result<Arc<TranslationResolver>> {
        let primary = DeepLTranslator::new(
            config.primary.api_key.clone(),
            config.primary.api_url.clone(),
            Duration::from_secs(config.primary.timeout_secs),
        );
        if config.primary.api_key.trim().is_empty() {
            warn!("No primary translation credential configured; requests will start at the secondary tier");
        }

        let secondary = LibreTranslator::new(
            config.secondary.api_url.clone(),
            Duration::from_secs(config.secondary.timeout_secs),
        );

        let mut dictionary = OfflineDictionary::bundled();
        if let Some(path) = &config.offline.extra_entries_path {
            dictionary
                .merge_file(Path::new(path))
                .with_context(|| format!("Failed to load offline dictionary entries from {}", path))?;
        }

        info!(
            "Initialized translation resolver: primary={}, secondary={}, offline pairs={}",
            config.primary.api_url,
            config.secondary.api_url,
            dictionary.pairs().len()
        );

        Ok(Arc::new(TranslationResolver::new(
            Arc::new(primary),
            Arc::new(secondary),
            Arc::new(LanguageCodeMap::bundled()),
            Arc::new(dictionary),
        )))
    }
}
