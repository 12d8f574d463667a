use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::dictionary::OfflineDictionary;
use super::interface::{
    ProviderError, ProviderTier, TranslationOutcome, TranslationProvider, TranslationRequest,
};
use super::language_codes::{normalize_code, LanguageCodeMap};

pub const FALLBACK_ADVISORY: &str = "All translation services are currently unavailable. \
    Please try again later, or use common words and short phrases that the offline dictionary covers.";

/// Resolves a translation by trying the primary provider, then the
/// secondary provider, then the offline dictionary. Never fails: every
/// path ends in a [`TranslationOutcome`].
pub struct TranslationResolver {
    primary: Arc<dyn TranslationProvider>,
    secondary: Arc<dyn TranslationProvider>,
    codes: Arc<LanguageCodeMap>,
    dictionary: Arc<OfflineDictionary>,
}

impl TranslationResolver {
    pub fn new(
        primary: Arc<dyn TranslationProvider>,
        secondary: Arc<dyn TranslationProvider>,
        codes: Arc<LanguageCodeMap>,
        dictionary: Arc<OfflineDictionary>,
    ) -> Self {
        Self {
            primary,
            secondary,
            codes,
            dictionary,
        }
    }

    pub fn language_codes(&self) -> &LanguageCodeMap {
        &self.codes
    }

    pub fn dictionary(&self) -> &OfflineDictionary {
        &self.dictionary
    }

    pub fn primary_configured(&self) -> bool {
        self.primary.is_configured()
    }

    pub async fn translate(&self, request: TranslationRequest) -> TranslationOutcome {
        let request_id = Uuid::new_v4();

        let original_text = request.text.unwrap_or_default();
        let source = normalize_code(request.source_language.as_deref().unwrap_or_default());
        let target = normalize_code(request.target_language.as_deref().unwrap_or_default());
        let text = original_text.trim();

        let missing = missing_fields(text, &source, &target);
        if !missing.is_empty() {
            warn!(%request_id, "Rejected translation request, missing: {}", missing.join(", "));
            return TranslationOutcome {
                translated_text: String::new(),
                original_text,
                source_language: source,
                target_language: target,
                provider_used: None,
                degraded: true,
                advisory: None,
                error: Some(format!("Missing required fields: {}", missing.join(", "))),
            };
        }

        debug!(%request_id, "Translating {} chars {} -> {}", text.len(), source, target);

        let outcome = |translated_text: String, tier: ProviderTier, advisory: Option<String>| {
            TranslationOutcome {
                translated_text,
                original_text: original_text.clone(),
                source_language: source.clone(),
                target_language: target.clone(),
                provider_used: Some(tier),
                degraded: tier != ProviderTier::Primary,
                advisory,
                error: None,
            }
        };

        match self.try_primary(text, &source, &target).await {
            Ok(translated) => {
                info!(%request_id, "Translated via {} ({})", self.primary.name(), ProviderTier::Primary.as_str());
                return outcome(translated, ProviderTier::Primary, None);
            }
            Err(e) => warn!(%request_id, "Primary tier {} failed: {}", self.primary.name(), e),
        }

        match self.secondary.attempt_translate(text, &source, &target).await {
            Ok(translated) if !translated.trim().is_empty() => {
                info!(%request_id, "Translated via {} ({})", self.secondary.name(), ProviderTier::Secondary.as_str());
                return outcome(translated, ProviderTier::Secondary, None);
            }
            Ok(_) => warn!(
                %request_id,
                "Secondary tier {} failed: {}",
                self.secondary.name(),
                ProviderError::EmptyTranslation
            ),
            Err(e) => warn!(%request_id, "Secondary tier {} failed: {}", self.secondary.name(), e),
        }

        if let Some(entry) = self.dictionary.lookup(&source, &target, text) {
            info!(%request_id, "Translated via offline dictionary");
            return outcome(entry.to_string(), ProviderTier::Offline, None);
        }

        warn!(%request_id, "All translation tiers failed for {} -> {}", source, target);
        outcome(
            format!("[Translation unavailable: {}]", text),
            ProviderTier::Offline,
            Some(FALLBACK_ADVISORY.to_string()),
        )
    }

    async fn try_primary(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        if !self.primary.is_configured() {
            debug!("Skipping primary tier: no credential");
            return Err(ProviderError::MissingCredential);
        }
        let from = self
            .codes
            .resolve(source)
            .ok_or_else(|| ProviderError::UnsupportedLanguage { code: source.to_string() })?;
        let to = self
            .codes
            .resolve(target)
            .ok_or_else(|| ProviderError::UnsupportedLanguage { code: target.to_string() })?;

        let translated = self.primary.attempt_translate(text, from, to).await?;
        if translated.trim().is_empty() {
            return Err(ProviderError::EmptyTranslation);
        }
        Ok(translated)
    }
}

fn missing_fields(text: &str, source: &str, target: &str) -> Vec<&'static str> {
    [("text", text), ("sourceLanguage", source), ("targetLanguage", target)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Behavior {
        Succeed(&'static str),
        Fail(u16),
        Empty,
    }

    struct FakeProvider {
        name: &'static str,
        behavior: Behavior,
        configured: bool,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String, String)>>,
        log: Option<Arc<Mutex<Vec<&'static str>>>>,
    }

    impl FakeProvider {
        fn new(name: &'static str, behavior: Behavior) -> Self {
            Self {
                name,
                behavior,
                configured: true,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                log: None,
            }
        }

        fn unconfigured(mut self) -> Self {
            self.configured = false;
            self
        }

        fn logging_to(mut self, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
            self.log = Some(log);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslationProvider for FakeProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn attempt_translate(
            &self,
            text: &str,
            from: &str,
            to: &str,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((text.to_string(), from.to_string(), to.to_string()));
            if let Some(log) = &self.log {
                log.lock().unwrap().push(self.name);
            }
            match self.behavior {
                Behavior::Succeed(text) => Ok(text.to_string()),
                Behavior::Fail(status) => Err(ProviderError::Http { status }),
                Behavior::Empty => Ok(String::new()),
            }
        }
    }

    fn resolver(primary: &Arc<FakeProvider>, secondary: &Arc<FakeProvider>) -> TranslationResolver {
        TranslationResolver::new(
            primary.clone(),
            secondary.clone(),
            Arc::new(LanguageCodeMap::bundled()),
            Arc::new(OfflineDictionary::bundled()),
        )
    }

    #[tokio::test]
    async fn primary_success_short_circuits() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Succeed("Szia")));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("unused")));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hi", "en", "hu"))
            .await;

        assert_eq!(outcome.translated_text, "Szia");
        assert_eq!(outcome.provider_used, Some(ProviderTier::Primary));
        assert!(!outcome.degraded);
        assert_eq!(outcome.advisory, None);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn primary_receives_mapped_codes_and_secondary_app_codes() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(500)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("Szia")));

        resolver(&primary, &secondary)
            .translate(TranslationRequest::new("  Hi ", "EN", "hu"))
            .await;

        assert_eq!(
            primary.seen.lock().unwrap()[0],
            ("Hi".to_string(), "EN".to_string(), "HU".to_string())
        );
        assert_eq!(
            secondary.seen.lock().unwrap()[0],
            ("Hi".to_string(), "en".to_string(), "hu".to_string())
        );
    }

    #[tokio::test]
    async fn primary_failure_falls_back_to_secondary() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(403)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("Szia")));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hi", "en", "hu"))
            .await;

        assert_eq!(outcome.translated_text, "Szia");
        assert_eq!(outcome.provider_used, Some(ProviderTier::Secondary));
        assert!(outcome.degraded);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn tiers_run_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(503)).logging_to(log.clone()));
        let secondary =
            Arc::new(FakeProvider::new("secondary", Behavior::Fail(503)).logging_to(log.clone()));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hello", "en", "hu"))
            .await;

        assert_eq!(*log.lock().unwrap(), vec!["primary", "secondary"]);
        assert_eq!(outcome.provider_used, Some(ProviderTier::Offline));
    }

    #[tokio::test]
    async fn unmapped_code_skips_primary_call() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Succeed("unused")));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("Bok")));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hi", "en", "hr"))
            .await;

        assert_eq!(primary.calls(), 0);
        assert_eq!(outcome.provider_used, Some(ProviderTier::Secondary));
        assert_eq!(outcome.translated_text, "Bok");
    }

    #[tokio::test]
    async fn missing_credential_skips_primary_call() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Succeed("unused")).unconfigured());
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("Szia")));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hi", "en", "hu"))
            .await;

        assert_eq!(primary.calls(), 0);
        assert_eq!(outcome.provider_used, Some(ProviderTier::Secondary));
    }

    #[tokio::test]
    async fn empty_results_count_as_failures() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Empty));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Empty));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hello", "en", "hu"))
            .await;

        assert_eq!(outcome.provider_used, Some(ProviderTier::Offline));
        assert_eq!(outcome.translated_text, "szia");
    }

    #[tokio::test]
    async fn offline_lookup_is_case_insensitive() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(500)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Fail(500)));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("Hello", "en", "hu"))
            .await;

        assert_eq!(outcome.translated_text, "szia");
        assert_eq!(outcome.provider_used, Some(ProviderTier::Offline));
        assert!(outcome.degraded);
        assert_eq!(outcome.advisory, None);
        assert_eq!(outcome.original_text, "Hello");
    }

    #[tokio::test]
    async fn total_miss_returns_placeholder_with_advisory() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(500)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Fail(500)));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("xyzzy", "en", "hu"))
            .await;

        assert_eq!(outcome.translated_text, "[Translation unavailable: xyzzy]");
        assert_eq!(outcome.provider_used, Some(ProviderTier::Offline));
        assert!(outcome.degraded);
        assert!(outcome.advisory.as_deref().is_some_and(|a| !a.is_empty()));
        assert_eq!(outcome.error, None);
    }

    #[tokio::test]
    async fn empty_text_is_rejected_without_calls() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Succeed("unused")));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("unused")));

        let outcome = resolver(&primary, &secondary)
            .translate(TranslationRequest::new("   ", "en", "hu"))
            .await;

        assert!(outcome.is_validation_failure());
        assert_eq!(outcome.translated_text, "");
        assert_eq!(outcome.provider_used, None);
        assert!(outcome.error.as_deref().is_some_and(|e| e.contains("text")));
        assert_eq!(primary.calls(), 0);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn missing_languages_are_reported() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Succeed("unused")));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Succeed("unused")));

        let request = TranslationRequest {
            text: Some("Hi".to_string()),
            source_language: None,
            target_language: Some(" ".to_string()),
        };
        let outcome = resolver(&primary, &secondary).translate(request).await;

        let error = outcome.error.unwrap();
        assert!(error.contains("sourceLanguage"));
        assert!(error.contains("targetLanguage"));
        assert!(!error.contains("text,"));
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn offline_outcomes_are_repeatable() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(500)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Fail(500)));
        let resolver = resolver(&primary, &secondary);

        let first = resolver.translate(TranslationRequest::new("Thank you", "en", "de")).await;
        let second = resolver.translate(TranslationRequest::new("Thank you", "en", "de")).await;

        assert_eq!(first, second);
        assert_eq!(first.translated_text, "danke");
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let primary = Arc::new(FakeProvider::new("primary", Behavior::Fail(500)));
        let secondary = Arc::new(FakeProvider::new("secondary", Behavior::Fail(500)));
        let resolver = Arc::new(resolver(&primary, &secondary));

        let words = ["hello", "water", "dog", "cat", "xyzzy"];
        let calls = words.iter().map(|word| {
            let resolver = resolver.clone();
            async move { resolver.translate(TranslationRequest::new(word, "en", "hu")).await }
        });
        let outcomes = futures::future::join_all(calls).await;

        let texts: Vec<&str> = outcomes.iter().map(|o| o.translated_text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["szia", "víz", "kutya", "macska", "[Translation unavailable: xyzzy]"]
        );
        assert_eq!(primary.calls(), 5);
        assert_eq!(secondary.calls(), 5);
    }
}
