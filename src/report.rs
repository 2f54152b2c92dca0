//! Rendering of ranked diagnosis results.
//!
//! The text layout is shared by the interactive session and the `diagnose`
//! command. Percentages are rounded to one decimal place only here.

use std::io::{self, Write};

use crate::catalog::store::SymptomCatalog;
use crate::core::selection::Selection;
use crate::core::types::{SymptomId, DISCLAIMER};
use crate::matching::engine::{DiagnosisOutcome, ScoredResult};

pub const NO_SELECTION_MESSAGE: &str = "You have not selected any symptoms.";
pub const NO_MATCHES_MESSAGE: &str = "No matches found. Try adding more symptoms.";

/// Write the human-readable report for one diagnosis request
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_text<W: Write>(
    out: &mut W,
    outcome: &DiagnosisOutcome,
    catalog: &SymptomCatalog,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n=== Diagnosis results ===")?;

    let results = match outcome {
        DiagnosisOutcome::NoSelection => return writeln!(out, "{NO_SELECTION_MESSAGE}"),
        DiagnosisOutcome::NoMatches => return writeln!(out, "{NO_MATCHES_MESSAGE}"),
        DiagnosisOutcome::Matches(results) => results,
    };

    writeln!(out, "Matched conditions (top first):\n")?;
    for (i, result) in results.iter().enumerate() {
        writeln!(
            out,
            "{}) {}  | matched: {}  | approx fit: {:.1}%",
            i + 1,
            result.condition.name,
            result.matched_count(),
            result.percent()
        )?;
        writeln!(out, "   Advice: {}", result.condition.advice)?;
        writeln!(out, "   Danger: {}", result.condition.danger)?;

        if verbose {
            writeln!(
                out,
                "   Matched: {}",
                label_list(&result.diagnosis.matched, catalog)
            )?;
            if !result.diagnosis.missing.is_empty() {
                writeln!(
                    out,
                    "   Missing: {}",
                    label_list(&result.diagnosis.missing, catalog)
                )?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{DISCLAIMER}")
}

/// Numbered symptom list in catalog display order
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_symptom_list<W: Write>(out: &mut W, catalog: &SymptomCatalog) -> io::Result<()> {
    writeln!(out, "\n--- Symptoms list ---")?;
    for symptom in catalog.list_symptoms() {
        writeln!(out, "{:>2}) {}", symptom.id, symptom.label)?;
    }
    Ok(())
}

/// Tab-separated report: a header row, then one row per ranked result
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_tsv<W: Write>(out: &mut W, results: &[ScoredResult]) -> io::Result<()> {
    writeln!(
        out,
        "rank\tcondition\tmatched\ttotal\tpercent\tadvice\tdanger"
    )?;
    for (i, r) in results.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{:.1}\t{}\t{}",
            i + 1,
            r.condition.name,
            r.score.matched_count,
            r.score.total,
            r.score.percent,
            r.condition.advice,
            r.condition.danger,
        )?;
    }
    Ok(())
}

/// Structured report including the outcome status and the selection itself
#[must_use]
pub fn to_json(
    outcome: &DiagnosisOutcome,
    selection: &Selection,
    catalog: &SymptomCatalog,
) -> serde_json::Value {
    let status = match outcome {
        DiagnosisOutcome::NoSelection => "no_selection",
        DiagnosisOutcome::NoMatches => "no_matches",
        DiagnosisOutcome::Matches(_) => "matches",
    };

    let results: Vec<serde_json::Value> = match outcome {
        DiagnosisOutcome::Matches(results) => results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                serde_json::json!({
                    "rank": i + 1,
                    "condition": r.condition.name,
                    "matched_count": r.score.matched_count,
                    "total_symptoms": r.score.total,
                    "percent": r.score.percent,
                    "advice": r.condition.advice,
                    "danger": r.condition.danger,
                    "matched_symptoms": symptom_entries(&r.diagnosis.matched, catalog),
                    "missing_symptoms": symptom_entries(&r.diagnosis.missing, catalog),
                })
            })
            .collect(),
        DiagnosisOutcome::NoSelection | DiagnosisOutcome::NoMatches => Vec::new(),
    };

    serde_json::json!({
        "status": status,
        "selection": symptom_entries(selection.list(), catalog),
        "results": results,
        "disclaimer": DISCLAIMER,
    })
}

fn symptom_entries(ids: &[SymptomId], catalog: &SymptomCatalog) -> Vec<serde_json::Value> {
    ids.iter()
        .map(|&id| serde_json::json!({ "id": id, "label": catalog.symptom_label(id) }))
        .collect()
}

fn label_list(ids: &[SymptomId], catalog: &SymptomCatalog) -> String {
    ids.iter()
        .map(|&id| catalog.symptom_label(id))
        .collect::<Vec<_>>()
        .join(", ")
}
