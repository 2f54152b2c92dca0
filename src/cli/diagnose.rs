//! Diagnose command - rank conditions for symptom ids given as arguments.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::core::selection::{Selection, SelectionError};
use crate::core::types::SymptomId;
use crate::matching::engine::{DiagnosisOutcome, MatchingConfig, MatchingEngine};
use crate::report;

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Symptom ids (see `catalog symptoms`); order does not affect ranking
    #[arg(value_name = "ID")]
    pub symptoms: Vec<u32>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Number of conditions to show (default: all)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_results: Option<u32>,

    /// Only show conditions with at least this many matched symptoms
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub min_matched: u32,
}

/// Execute diagnose subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, an id is not in the
/// catalog, or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DiagnoseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let mut selection = Selection::new();
    for &raw in &args.symptoms {
        let id = SymptomId::new(raw);
        match selection.add(&catalog, id) {
            Ok(()) => {}
            Err(SelectionError::AlreadyPresent(_)) => {
                tracing::warn!(symptom = raw, "Ignoring duplicate symptom id");
            }
            Err(err) => anyhow::bail!("{err} (run `catalog symptoms` to list valid ids)"),
        }
    }

    if verbose {
        eprintln!(
            "Selected {} symptom(s) from a catalog of {} conditions",
            selection.len(),
            catalog.len()
        );
    }

    let config = MatchingConfig {
        min_matched: usize::try_from(args.min_matched).unwrap_or(usize::MAX),
        max_results: args
            .max_results
            .map(|max| usize::try_from(max).unwrap_or(usize::MAX)),
    };
    let engine = MatchingEngine::with_config(&catalog, config);
    let outcome = engine.evaluate(&selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => report::write_text(&mut out, &outcome, &catalog, verbose)?,
        OutputFormat::Json => {
            let json = report::to_json(&outcome, &selection, &catalog);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Tsv => {
            let results = match &outcome {
                DiagnosisOutcome::NoSelection => {
                    eprintln!("{}", report::NO_SELECTION_MESSAGE);
                    &[][..]
                }
                DiagnosisOutcome::NoMatches => {
                    eprintln!("{}", report::NO_MATCHES_MESSAGE);
                    &[][..]
                }
                DiagnosisOutcome::Matches(results) => results.as_slice(),
            };
            report::write_tsv(&mut out, results)?;
        }
    }
    out.flush()?;

    Ok(())
}
