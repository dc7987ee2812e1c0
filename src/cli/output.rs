use crate::{CheckResult, Misspelling};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMisspelling {
    line: usize,
    column: usize,
    word: String,
    suggestions: Vec<String>,
    context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    file: String,
    total_errors: usize,
    errors: Vec<JsonMisspelling>,
}

pub fn print_misspelling(error: &Misspelling, colored_output: bool) {
    println!("{}", format_misspelling(error, colored_output));
}

/// The whole report as one JSON document, printed once checking is done.
pub fn print_json_report(file_path: &Path, result: &CheckResult) -> Result<()> {
    println!("{}", render_json(file_path, result)?);
    Ok(())
}

/// One report line: the word, where it was found, its context and the
/// substitutes, space separated.
pub fn format_misspelling(error: &Misspelling, colored_output: bool) -> String {
    let suggestions = error.suggestions.join(" ");

    if colored_output {
        format!(
            "Word ({}) is misspelled on line {} column {}...context is ({}), possible substitutes are ({})",
            error.word.red().bold(),
            error.line.to_string().blue(),
            error.column.to_string().blue(),
            format_context(&error.context, &error.word),
            suggestions.green()
        )
    } else {
        format!(
            "Word ({}) is misspelled on line {} column {}...context is ({}), possible substitutes are ({})",
            error.word, error.line, error.column, error.context, suggestions
        )
    }
}

fn render_json(file_path: &Path, result: &CheckResult) -> Result<String> {
    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_errors: result.error_count,
        errors: result
            .errors
            .iter()
            .map(|e| JsonMisspelling {
                line: e.line,
                column: e.column,
                word: e.word.clone(),
                suggestions: e.suggestions.clone(),
                context: e.context.clone(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize report")
}

fn format_context(context: &str, word: &str) -> String {
    context
        .split(' ')
        .map(|w| {
            if w.trim_end_matches('.') == word {
                w.red().bold().to_string()
            } else {
                w.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_check_summary(total_errors: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "misspelling" } else { "misspellings" };
        if colored {
            println!(
                "{} {} {} found",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word
            );
        } else {
            println!("✗ {} {} found", total_errors, error_word);
        }
    }
}
