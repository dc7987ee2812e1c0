pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::SpellChecker;
pub use config::Config;
pub use error::CheckError;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub error_count: usize,
    pub errors: Vec<Misspelling>,
}

/// A word flagged as unknown, with the window of text it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
}
