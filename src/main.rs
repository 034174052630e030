//! Snipcheck CLI: analyze one snippet, render the report, persist it

use anyhow::{Context, Result};
use clap::Parser;
use snipcheck::analyzer::AnalysisEngine;
use snipcheck::reporter::{ConsoleReporter, JsonReporter};
use snipcheck::{refactor, SourceText, DEMO_SNIPPET};
use std::fs;
use std::path::PathBuf;

/// Heuristic quality analyzer for JavaScript snippets
#[derive(Parser, Debug)]
#[command(name = "snipcheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Snippet file to analyze (defaults to the built-in demo snippet)
    path: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let code = match &args.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet: {}", path.display()))?,
        None => DEMO_SNIPPET.to_string(),
    };

    let console = if args.no_color {
        ConsoleReporter::new().without_colors()
    } else {
        ConsoleReporter::new()
    };
    console.banner();

    let engine = AnalysisEngine::new();
    let result = engine.analyze(&SourceText::new(code.as_str()));

    console.report(&result, &refactor::rewrite(&code));

    let reporter = JsonReporter::new();
    reporter.save(&result, &code)?;
    println!("✅ Report saved to {}", reporter.path().display());
    println!();

    Ok(())
}
