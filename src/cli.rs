use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Editorial style guard - review Markdown articles")]
#[command(long_about = "Reviews every Markdown article in a directory against the fixed\n\
    editorial style guide and prints a summary plus per-file violation tables.\n\n\
    Exit codes:\n  \
    0 - Review completed\n  \
    1 - Articles failed review (--strict only)\n  \
    2 - Usage or runtime error")]
pub struct Cli {
    /// Directory containing the articles to review
    pub dir: PathBuf,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: markdown, json]
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Write report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress report output
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with a non-zero status when any article fails review
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
