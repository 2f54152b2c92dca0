use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::SymptomCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::condition::Condition;
use crate::report;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all symptoms with their ids
    Symptoms {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List all conditions in ranking tie-break order
    Conditions {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific condition
    Show {
        /// Condition name (case-insensitive)
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a condition is not
/// found, or writing output fails.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::Symptoms { catalog } => run_symptoms(catalog, format),
        CatalogCommands::Conditions { catalog } => run_conditions(catalog, format, verbose),
        CatalogCommands::Show { name, catalog } => run_show(&name, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_symptoms(catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    match format {
        OutputFormat::Text => {
            report::write_symptom_list(&mut std::io::stdout().lock(), &catalog)?;
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.list_symptoms())?
            );
        }
        OutputFormat::Tsv => {
            println!("id\tlabel");
            for s in catalog.list_symptoms() {
                println!("{}\t{}", s.id, s.label);
            }
        }
    }

    Ok(())
}

fn run_conditions(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} symptoms and {} conditions",
            catalog.list_symptoms().len(),
            catalog.len()
        );
    }

    let conditions = catalog.list_conditions();
    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let name_width = conditions
                .iter()
                .map(|c| c.name.len())
                .max()
                .unwrap_or(4)
                .max(4);
            let total_width = name_width + 1 + 8;

            println!("Condition Catalog ({} conditions)\n", conditions.len());
            println!("{:<name_w$} {:>8}", "Name", "Symptoms", name_w = name_width);
            println!("{}", "-".repeat(total_width));

            for c in conditions {
                println!(
                    "{:<name_w$} {:>8}",
                    c.name,
                    c.symptom_count(),
                    name_w = name_width
                );
                if verbose {
                    println!("  └─ {}", symptom_labels(c, &catalog));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> =
                conditions.iter().map(|c| condition_json(c, &catalog)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tsymptom_count\tsymptom_ids\tadvice\tdanger");
            for c in conditions {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    c.name,
                    c.symptom_count(),
                    symptom_ids(c),
                    c.advice,
                    c.danger
                );
            }
        }
    }

    Ok(())
}

fn run_show(name: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let condition = catalog.condition(name).ok_or_else(|| {
        anyhow::anyhow!("Condition '{name}' not found (run `catalog conditions` to list names)")
    })?;

    match format {
        OutputFormat::Text => {
            println!("Condition: {}\n", condition.name);
            println!("Symptoms ({}):", condition.symptom_count());
            for &id in &condition.symptoms {
                println!("  {:>2}) {}", id, catalog.symptom_label(id));
            }
            println!("\nAdvice: {}", condition.advice);
            println!("Danger: {}", condition.danger);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&condition_json(condition, &catalog))?
            );
        }
        OutputFormat::Tsv => {
            println!("name\tsymptom_id\tsymptom_label");
            for &id in &condition.symptoms {
                println!("{}\t{}\t{}", condition.name, id, catalog.symptom_label(id));
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} symptoms and {} conditions to {}",
        catalog.list_symptoms().len(),
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn condition_json(condition: &Condition, catalog: &SymptomCatalog) -> serde_json::Value {
    let symptoms: Vec<serde_json::Value> = condition
        .symptoms
        .iter()
        .map(|&id| serde_json::json!({ "id": id, "label": catalog.symptom_label(id) }))
        .collect();

    serde_json::json!({
        "name": condition.name,
        "symptoms": symptoms,
        "advice": condition.advice,
        "danger": condition.danger,
    })
}

fn symptom_labels(condition: &Condition, catalog: &SymptomCatalog) -> String {
    condition
        .symptoms
        .iter()
        .map(|&id| catalog.symptom_label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn symptom_ids(condition: &Condition) -> String {
    condition
        .symptoms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
