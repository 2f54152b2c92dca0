//! Command-line interface for symptom-checker.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **session**: Interactive menu for building a selection and diagnosing it
//! - **diagnose**: Rank conditions for symptom ids given on the command line
//! - **catalog**: List symptoms or conditions, show one condition, or export
//!
//! ## Usage
//!
//! ```text
//! # Interactive menu, saving snapshots to a custom history file
//! symptom-checker session --history ~/symptoms.log
//!
//! # One-shot ranking for fever, cough and fatigue
//! symptom-checker diagnose 1 2 6
//!
//! # JSON output for scripting
//! symptom-checker --format json diagnose 1 2 6
//!
//! # Browse the catalog
//! symptom-checker catalog symptoms
//! symptom-checker catalog show "Common cold"
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::SymptomCatalog;

pub mod catalog;
pub mod diagnose;
pub mod session;

#[derive(Parser)]
#[command(name = "symptom-checker")]
#[command(author = "Symptom Checker Contributors")]
#[command(version)]
#[command(about = "Rank candidate conditions from a selection of observed symptoms")]
#[command(
    long_about = "symptom-checker matches a set of observed symptoms against a fixed catalog of conditions.\n\nEach candidate is ranked by how many of its defining symptoms you selected and shown with:\n- Advice on what to do\n- Red flags that call for urgent care\n\nThis program is educational and does NOT replace a doctor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive symptom menu
    Session(session::SessionArgs),

    /// Rank conditions for the given symptom ids
    Diagnose(diagnose::DiagnoseArgs),

    /// Browse or export the symptom catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if a path is given, otherwise the embedded one
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<SymptomCatalog> {
    let catalog = if let Some(path) = path {
        SymptomCatalog::load_from_file(path)?
    } else {
        SymptomCatalog::load_embedded()?
    };
    Ok(catalog)
}
