use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Inbound translation request. Fields are optional so that a missing value
/// becomes a validation outcome instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            source_language: Some(source_language.to_string()),
            target_language: Some(target_language.to_string()),
        }
    }
}

/// Which tier produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTier {
    Primary,
    Secondary,
    Offline,
}

impl ProviderTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTier::Primary => "primary",
            ProviderTier::Secondary => "secondary",
            ProviderTier::Offline => "offline",
        }
    }
}

/// Result of a single `translate` call. Built fresh per call and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    pub provider_used: Option<ProviderTier>,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationOutcome {
    pub fn is_validation_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// A network translation tier.
///
/// `from` and `to` arrive already in the dialect the provider expects; the
/// resolver does any remapping before calling in.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether the provider has what it needs to attempt a call
    fn is_configured(&self) -> bool {
        true
    }

    async fn attempt_translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider credential is not configured")]
    MissingCredential,

    #[error("Unsupported language code: {code}")]
    UnsupportedLanguage { code: String },

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Provider returned no translation")]
    EmptyTranslation,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if let Some(status) = err.status() {
            ProviderError::Http {
                status: status.as_u16(),
            }
        } else {
            ProviderError::Network(err)
        }
    }
}
