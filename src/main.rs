use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use ctxspell::cli::output::{self, OutputFormat};
use ctxspell::{Config, SpellChecker};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ctxspell")]
#[command(version, about = "Flag unknown words and rank likely corrections", long_about = None)]
struct Cli {
    /// Reference dictionary: whitespace-separated words
    #[arg(value_name = "DICTIONARY", required_unless_present = "completion")]
    dictionary: Option<PathBuf>,

    /// Text file to check
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Configuration file to use instead of the local/global search
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "ctxspell", &mut io::stdout());
        return Ok(());
    }

    let (Some(dictionary), Some(file)) = (cli.dictionary, cli.file) else {
        anyhow::bail!("A dictionary and a file to check are required. Use --help for usage information.");
    };

    let config = Config::load(cli.config.as_deref())?;
    let colored = !cli.no_color;
    if !colored {
        colored::control::set_override(false);
    }

    let text_output = cli.format == OutputFormat::Text;
    let mut checker = SpellChecker::new(&config, &dictionary)?;

    // text reports go out as they are found, so a later read failure keeps them
    let result = checker.check_file(&file, |error| {
        if text_output {
            output::print_misspelling(error, colored);
        }
    })?;

    if text_output {
        output::print_check_summary(result.error_count, colored);
    } else {
        output::print_json_report(&file, &result)?;
    }

    // Exit with appropriate code
    if result.error_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
