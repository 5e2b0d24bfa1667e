use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use style_guard::checker::{ReviewResult, StyleChecker};
use style_guard::cli::Cli;
use style_guard::output::{JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter};
use style_guard::scanner::{ArticleFilter, DirectoryScanner};
use style_guard::{EXIT_ERROR, EXIT_REVIEW_FAILED, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> style_guard::Result<i32> {
    // 1. Build the article filter
    let filter = ArticleFilter::new(&cli.exclude)?;

    // 2. List eligible articles in review order
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(&cli.dir)?;

    // 3. Review each article (parallel with rayon; indexed collect keeps
    //    the sorted filename order)
    let checker = StyleChecker::new()?;
    let results: Vec<ReviewResult> = files
        .par_iter()
        .map(|path| review_file(path, &checker))
        .collect::<style_guard::Result<_>>()?;

    // 4. Format output
    let output = format_output(cli.format, &results)?;

    // 5. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    let has_failures = results.iter().any(|r| r.status.is_fail());
    if cli.strict && has_failures {
        Ok(EXIT_REVIEW_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

// A file that cannot be read or decoded aborts the whole run; no partial
// report is emitted.
fn review_file(path: &Path, checker: &StyleChecker) -> style_guard::Result<ReviewResult> {
    let content =
        fs::read_to_string(path).map_err(|e| style_guard::StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let filename = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    Ok(ReviewResult::new(filename, checker.review(&content)))
}

fn format_output(
    format: OutputFormat,
    results: &[ReviewResult],
) -> style_guard::Result<String> {
    match format {
        OutputFormat::Markdown => MarkdownFormatter.format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
