pub mod interface;
pub mod language_codes;
pub mod dictionary;
pub mod deepl;
pub mod libre;
pub mod resolver;
pub mod factory;

#[cfg(test)]
mod test_support;

pub use interface::{ProviderError, ProviderTier, TranslationOutcome, TranslationProvider, TranslationRequest};
pub use language_codes::LanguageCodeMap;
pub use dictionary::OfflineDictionary;
pub use resolver::TranslationResolver;
pub use factory::TranslatorFactory;
