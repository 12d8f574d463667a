use std::sync::Arc;

use crate::config::Config;
use crate::translate::{TranslationResolver, TranslatorFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resolver: Arc<TranslationResolver>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let resolver = TranslatorFactory::create_resolver(&config.translation_config)?;
        Ok(Self { config, resolver })
    }

    /// State around an already-built resolver
    pub fn with_resolver(config: Config, resolver: Arc<TranslationResolver>) -> Self {
        Self { config, resolver }
    }
}
