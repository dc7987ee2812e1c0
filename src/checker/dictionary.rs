use crate::CheckError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What the checker has concluded about a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Loaded from the reference dictionary.
    KnownGood,
    /// Not in the dictionary; holds the ranked replacements, best first.
    Misspelled(Vec<String>),
}

impl Verdict {
    pub fn is_known_good(&self) -> bool {
        matches!(self, Verdict::KnownGood)
    }

    pub fn candidates(&self) -> &[String] {
        match self {
            Verdict::KnownGood => &[],
            Verdict::Misspelled(candidates) => candidates,
        }
    }
}

/// Reference vocabulary plus the verdicts memoized for words seen during a run.
///
/// Reference words are lowercased on load. Lookups are exact, so callers
/// lowercase before looking a word up.
#[derive(Debug, Default)]
pub struct Dictionary {
    verdicts: HashMap<String, Verdict>,
    // load order, so candidate ties resolve the same way on every run
    known_good: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a file of whitespace-separated words
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn load_from_path(path: &Path) -> Result<Self, CheckError> {
        let bytes = fs::read(path).map_err(|e| CheckError::io(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let dictionary = Self::from_words(content.split_whitespace());

        debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );

        Ok(dictionary)
    }

    /// Build a dictionary from reference words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.add_known_good(word.into().to_lowercase());
        }
        dictionary
    }

    fn add_known_good(&mut self, word: String) {
        if self.verdicts.contains_key(&word) {
            return;
        }
        self.known_good.push(word.clone());
        self.verdicts.insert(word, Verdict::KnownGood);
    }

    pub fn lookup(&self, word: &str) -> Option<&Verdict> {
        self.verdicts.get(word)
    }

    /// Memoize a verdict for a word that has none yet.
    ///
    /// Existing verdicts are never replaced, so the first one computed for a
    /// word is the one every later occurrence sees.
    pub fn insert(&mut self, word: String, verdict: Verdict) -> &Verdict {
        self.verdicts.entry(word).or_insert(verdict)
    }

    /// Words loaded from the reference dictionary, in load order.
    pub fn known_good_words(&self) -> &[String] {
        &self.known_good
    }

    /// Number of reference words.
    pub fn len(&self) -> usize {
        self.known_good.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_good.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("words.txt");
        std::fs::write(&dict_path, "hello world\n  Test\n\nhello\tagain\n").unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.known_good_words(), ["hello", "world", "test", "again"]);
        assert!(dict.lookup("test").unwrap().is_known_good());
        assert!(dict.lookup("Test").is_none());
        assert!(dict.lookup("notfound").is_none());
    }

    #[test]
    fn test_load_dictionary_with_invalid_utf8() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("latin1.txt");
        std::fs::write(&dict_path, b"caf\xe9 cat\nsat\n").unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert_eq!(dict.known_good_words(), ["caf\u{FFFD}", "cat", "sat"]);
    }

    #[test]
    fn test_missing_dictionary_is_io_error() {
        let dir = tempdir().unwrap();
        let err = Dictionary::load_from_path(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CheckError::Io { .. }));
    }

    #[test]
    fn test_memoized_verdicts_are_not_replaced() {
        let mut dict = Dictionary::from_words(["cat"]);

        let first = dict
            .insert("cst".to_string(), Verdict::Misspelled(vec!["cat".to_string()]))
            .clone();
        let second = dict.insert("cst".to_string(), Verdict::Misspelled(Vec::new()));
        assert_eq!(&first, second);

        // a memoized word never becomes a candidate source
        assert_eq!(dict.known_good_words(), ["cat"]);

        // reference words cannot be overwritten either
        dict.insert("cat".to_string(), Verdict::Misspelled(Vec::new()));
        assert!(dict.lookup("cat").unwrap().is_known_good());
    }

    #[test]
    fn test_verdict_candidates() {
        assert!(Verdict::KnownGood.candidates().is_empty());
        let verdict = Verdict::Misspelled(vec!["cat".to_string(), "sat".to_string()]);
        assert_eq!(verdict.candidates(), ["cat", "sat"]);
    }
}
