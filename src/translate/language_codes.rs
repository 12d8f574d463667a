use std::collections::HashMap;

/// Maps the application's short language codes to the primary provider's
/// dialect. Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct LanguageCodeMap {
    codes: HashMap<String, String>,
}

const PRIMARY_CODES: &[(&str, &str)] = &[
    ("bg", "BG"),
    ("cs", "CS"),
    ("da", "DA"),
    ("de", "DE"),
    ("el", "EL"),
    ("en", "EN"),
    ("es", "ES"),
    ("et", "ET"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("hu", "HU"),
    ("id", "ID"),
    ("it", "IT"),
    ("ja", "JA"),
    ("ko", "KO"),
    ("lt", "LT"),
    ("lv", "LV"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "PT"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("sl", "SL"),
    ("sv", "SV"),
    ("tr", "TR"),
    ("uk", "UK"),
    ("zh", "ZH"),
];

impl LanguageCodeMap {
    /// The table shipped with the application
    pub fn bundled() -> Self {
        Self::from_pairs(PRIMARY_CODES.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let codes = pairs
            .into_iter()
            .map(|(app, provider)| (normalize_code(app), provider.to_string()))
            .collect();
        Self { codes }
    }

    /// Provider dialect for an application code, if known
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.codes.get(&normalize_code(code)).map(|s| s.as_str())
    }

    /// Application codes in sorted order
    pub fn app_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.codes.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}
