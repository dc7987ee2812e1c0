pub mod context;
pub mod dictionary;
pub mod similarity;
pub mod suggestions;
pub mod tokenizer;

use crate::{CheckError, CheckResult, Config, Misspelling};
use context::{ContextWindow, Slot};
use dictionary::{Dictionary, Verdict};
use similarity::Metric;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Flags unknown words in a document and ranks likely replacements for them.
///
/// Verdicts are memoized in the checker's own dictionary, so each distinct
/// unknown word is compared against the vocabulary once per checker.
pub struct SpellChecker {
    dictionary: Dictionary,
    metric: Metric,
    context_radius: usize,
    max_candidates: usize,
    strip_trailing_period: bool,
    candidate_scans: usize,
}

impl SpellChecker {
    pub fn new(config: &Config, dictionary_path: &Path) -> Result<Self, CheckError> {
        let dictionary = Dictionary::load_from_path(dictionary_path)?;
        if dictionary.is_empty() {
            warn!(
                path = %dictionary_path.display(),
                "dictionary has no words, every checked word will be flagged"
            );
        }
        Ok(Self::with_dictionary(dictionary, config))
    }

    pub fn with_dictionary(dictionary: Dictionary, config: &Config) -> Self {
        Self {
            dictionary,
            metric: config.metric,
            context_radius: config.context_radius,
            max_candidates: config.max_candidates,
            strip_trailing_period: config.strip_trailing_period,
            candidate_scans: 0,
        }
    }

    /// How many times a full dictionary scan was run for an unknown word.
    pub fn candidate_scans(&self) -> usize {
        self.candidate_scans
    }

    /// Check a single word.
    ///
    /// Returns `None` when the word is fine (exempt or in the dictionary),
    /// otherwise the ranked candidates, which may be empty.
    pub fn check_word(&mut self, word: &str) -> Option<&[String]> {
        let word = self.normalize(word);
        if word.is_empty() || is_exempt(word) {
            return None;
        }

        let key = word.to_lowercase();
        match self.dictionary.lookup(&key) {
            Some(verdict) if verdict.is_known_good() => return None,
            Some(_) => {
                trace!(word = %key, "reusing memoized candidates");
            }
            None => {
                let candidates = suggestions::generate(
                    &key,
                    self.dictionary.known_good_words(),
                    self.max_candidates,
                    &self.metric,
                );
                self.candidate_scans += 1;
                debug!(
                    word = %key,
                    scanned = self.dictionary.len(),
                    found = candidates.len(),
                    "ranked candidates"
                );
                self.dictionary.insert(key.clone(), Verdict::Misspelled(candidates));
            }
        }

        self.dictionary.lookup(&key).map(Verdict::candidates)
    }

    /// Check a file, handing each misspelling to `on_misspelling` as soon as
    /// it is found.
    pub fn check_file<F>(
        &mut self,
        path: &Path,
        on_misspelling: F,
    ) -> Result<CheckResult, CheckError>
    where
        F: FnMut(&Misspelling),
    {
        let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
        debug!(path = %path.display(), "checking file");
        self.check_reader(BufReader::new(file), path, on_misspelling)
    }

    pub fn check_str(&mut self, text: &str) -> Result<CheckResult, CheckError> {
        self.check_reader(text.as_bytes(), Path::new("<text>"), |_| {})
    }

    /// Check every line of `reader`; `source` only labels I/O errors.
    ///
    /// Lines are decoded lossily, so only a failing read is an error. Whatever
    /// reached `on_misspelling` before such a failure stays reported.
    pub fn check_reader<R, F>(
        &mut self,
        mut reader: R,
        source: &Path,
        mut on_misspelling: F,
    ) -> Result<CheckResult, CheckError>
    where
        R: BufRead,
        F: FnMut(&Misspelling),
    {
        let mut window = ContextWindow::new(self.context_radius)?;
        let mut errors = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| CheckError::io(source, e))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            for (word, column) in tokenizer::split_line(&line) {
                window.add(word, line_no, column);
                self.review_centered(&window, &mut errors, &mut on_misspelling);
            }
        }

        // pad the window until the last real word has been reviewed
        for _ in 0..window.radius() {
            window.add_sentinel();
            if matches!(window.centered(), Some(Slot::Sentinel)) {
                break;
            }
            self.review_centered(&window, &mut errors, &mut on_misspelling);
        }

        Ok(CheckResult {
            error_count: errors.len(),
            errors,
        })
    }

    fn review_centered<F>(
        &mut self,
        window: &ContextWindow,
        errors: &mut Vec<Misspelling>,
        on_misspelling: &mut F,
    ) where
        F: FnMut(&Misspelling),
    {
        let Some(Slot::Word(token)) = window.centered() else {
            return;
        };

        let Some(suggestions) = self.check_word(&token.word).map(<[String]>::to_vec) else {
            return;
        };

        let misspelling = Misspelling {
            word: self.normalize(&token.word).to_string(),
            line: token.line,
            column: token.column,
            context: window.snapshot(),
            suggestions,
        };
        on_misspelling(&misspelling);
        errors.push(misspelling);
    }

    fn normalize<'w>(&self, word: &'w str) -> &'w str {
        if self.strip_trailing_period {
            tokenizer::strip_trailing_period(word)
        } else {
            word
        }
    }
}

/// Words that pass without a dictionary lookup: the pronoun "I" and
/// capitalized words, which are taken to be proper nouns.
pub fn is_exempt(word: &str) -> bool {
    if word == "I" {
        return true;
    }

    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();

    !rest.is_empty()
        && first.to_uppercase().eq(std::iter::once(first))
        && rest == rest.to_lowercase()
}
