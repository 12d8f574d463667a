use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::interface::{ProviderError, TranslationProvider};

/// Primary tier: a DeepL-compatible paid API.
///
/// Expects language codes already mapped to the provider dialect ("EN", "HU").
#[derive(Debug, Clone)]
pub struct DeepLTranslator {
    client: Client,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            timeout,
        }
    }
}

#[async_trait]
impl TranslationProvider for DeepLTranslator {
    fn name(&self) -> &str {
        "deepl"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn attempt_translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::MissingCredential);
        }

        let params = [("text", text), ("source_lang", from), ("target_lang", to)];

        debug!("DeepL request: {} -> {}, {} chars", from, to, text.len());

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .timeout(self.timeout)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http {
                status: response.status().as_u16(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let translated = json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .map(str::trim)
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(ProviderError::EmptyTranslation);
        }

        Ok(translated.to_string())
    }
}
