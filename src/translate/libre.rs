use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{ProviderError, TranslationProvider};

/// Secondary tier: a LibreTranslate-compatible free API. Takes the
/// application's own language codes and needs no credential.
#[derive(Debug, Clone)]
pub struct LibreTranslator {
    client: Client,
    api_url: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreResponse {
    translated_text: Option<String>,
}

impl LibreTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_url,
            timeout,
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslator {
    fn name(&self) -> &str {
        "libretranslate"
    }

    fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty()
    }

    async fn attempt_translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, ProviderError> {
        let request = LibreRequest {
            q: text,
            source: from,
            target: to,
            format: "text",
        };

        debug!("LibreTranslate request: {} -> {}, {} chars", from, to, text.len());

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http {
                status: response.status().as_u16(),
            });
        }

        let body: LibreResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match body.translated_text {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(ProviderError::EmptyTranslation),
        }
    }
}
