use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Last-resort word/phrase table.
///
/// Keyed by `(source, target)` language pair, then by the trimmed,
/// lower-cased source phrase. Lookups are whole-string matches only.
#[derive(Debug, Clone, Default)]
pub struct OfflineDictionary {
    tables: HashMap<(String, String), HashMap<String, String>>,
}

/// One bidirectional entry as stored in an extra-entries file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub source_language: String,
    pub target_language: String,
    pub phrase: String,
    pub translation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

const EN_HU: &[(&str, &str)] = &[
    ("hello", "szia"),
    ("hi", "szia"),
    ("good morning", "jó reggelt"),
    ("good evening", "jó estét"),
    ("good night", "jó éjszakát"),
    ("goodbye", "viszontlátásra"),
    ("thank you", "köszönöm"),
    ("thanks", "kösz"),
    ("please", "kérem"),
    ("yes", "igen"),
    ("no", "nem"),
    ("sorry", "bocsánat"),
    ("water", "víz"),
    ("bread", "kenyér"),
    ("house", "ház"),
    ("dog", "kutya"),
    ("cat", "macska"),
    ("friend", "barát"),
    ("today", "ma"),
    ("tomorrow", "holnap"),
    ("how are you", "hogy vagy"),
];

const EN_DE: &[(&str, &str)] = &[
    ("hello", "hallo"),
    ("good morning", "guten morgen"),
    ("good evening", "guten abend"),
    ("good night", "gute nacht"),
    ("goodbye", "auf wiedersehen"),
    ("thank you", "danke"),
    ("please", "bitte"),
    ("yes", "ja"),
    ("no", "nein"),
    ("sorry", "entschuldigung"),
    ("water", "wasser"),
    ("bread", "brot"),
    ("house", "haus"),
    ("dog", "hund"),
    ("cat", "katze"),
    ("friend", "freund"),
    ("today", "heute"),
    ("tomorrow", "morgen"),
    ("how are you", "wie geht es dir"),
];

const HU_DE: &[(&str, &str)] = &[
    ("szia", "hallo"),
    ("köszönöm", "danke"),
    ("igen", "ja"),
    ("nem", "nein"),
    ("víz", "wasser"),
    ("kenyér", "brot"),
    ("ház", "haus"),
    ("kutya", "hund"),
    ("macska", "katze"),
];

impl OfflineDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the application
    pub fn bundled() -> Self {
        let mut dictionary = Self::new();
        for (pair, entries) in [(("en", "hu"), EN_HU), (("en", "de"), EN_DE), (("hu", "de"), HU_DE)] {
            for (phrase, translation) in entries {
                dictionary.insert_pair(pair.0, pair.1, phrase, translation);
            }
        }
        dictionary
    }

    /// Insert an entry in both directions. Existing entries are overwritten.
    pub fn insert_pair(&mut self, source: &str, target: &str, phrase: &str, translation: &str) {
        self.insert_one_way(source, target, phrase, translation);
        self.insert_one_way(target, source, translation, phrase);
    }

    fn insert_one_way(&mut self, source: &str, target: &str, phrase: &str, translation: &str) {
        self.tables
            .entry((normalize_key(source), normalize_key(target)))
            .or_default()
            .insert(normalize_key(phrase), translation.trim().to_string());
    }

    /// Merge entries from a JSON file holding a list of [`DictionaryEntry`]
    pub fn merge_file(&mut self, path: &Path) -> Result<usize, DictionaryLoadError> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(&content)?;
        let count = entries.len();
        for entry in &entries {
            self.insert_pair(
                &entry.source_language,
                &entry.target_language,
                &entry.phrase,
                &entry.translation,
            );
        }
        debug!("Merged {} offline dictionary entries from {}", count, path.display());
        Ok(count)
    }

    pub fn lookup(&self, source: &str, target: &str, text: &str) -> Option<&str> {
        self.tables
            .get(&(normalize_key(source), normalize_key(target)))
            .and_then(|table| table.get(&normalize_key(text)))
            .map(|s| s.as_str())
    }

    /// Language pairs with at least one entry, sorted
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .tables
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(pair, _)| pair.clone())
            .collect();
        pairs.sort();
        pairs
    }
}

fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}
