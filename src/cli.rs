//! Command-line interface definitions.

use clap::{ColorChoice, Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

/// One-shot retoucher for the recruiting site's landing page.
///
/// Reads the page, applies the five content updates (card emoji watermarks,
/// office map links, Johor and work-from-home card refreshes, LinkedIn
/// buttons), and writes the retouched copy next to the original. Runnable
/// with no arguments from the directory holding `index.html`.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Page to retouch
    #[arg(short, long, default_value = "index.html", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the retouched page
    #[arg(short, long, default_value = "index_UPDATED.html", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// What to do with rewrite rules that match nothing in the page
    #[arg(long, value_enum, default_value = "warn")]
    pub unmatched: Unmatched,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Reaction to a rewrite rule that found no target in the page.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    /// Skip the rule without a word
    Silent,
    /// Log one warning per unmatched rule
    Warn,
    /// Fail the run and write no output
    Strict,
}
