//! # symptom-checker
//!
//! A library for ranking candidate conditions from a set of observed symptoms.
//!
//! The user picks symptoms from a fixed catalog. Each condition in the catalog
//! is defined by a set of symptoms and carries advice text and red-flag
//! warnings. Conditions are ranked by how many of their defining symptoms were
//! selected, then by what fraction of their definition that covers.
//!
//! This is an educational tool. It makes no claim of medical validity.
//!
//! ## Features
//!
//! - **Fixed catalog**: Symptoms and conditions embedded at compile time and validated by `build.rs`
//! - **Deterministic ranking**: Match count, then percentage, then catalog order
//! - **Distinct empty outcomes**: "nothing selected" and "nothing matched" are separate results
//! - **History log**: Timestamped selection snapshots appended to a plain-text file
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_checker::{DiagnosisOutcome, MatchingEngine, Selection, SymptomCatalog};
//! use symptom_checker::core::types::SymptomId;
//!
//! let catalog = SymptomCatalog::load_embedded().unwrap();
//!
//! let mut selection = Selection::new();
//! for id in [1, 2, 6] {
//!     selection.add(&catalog, SymptomId::new(id)).unwrap();
//! }
//!
//! let engine = MatchingEngine::new(&catalog);
//! match engine.evaluate(&selection) {
//!     DiagnosisOutcome::NoSelection => println!("Nothing selected"),
//!     DiagnosisOutcome::NoMatches => println!("No matches"),
//!     DiagnosisOutcome::Matches(results) => {
//!         for r in results {
//!             println!("{}: {:.1}%", r.condition.name, r.percent());
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Symptom and condition catalog storage and indexing
//! - [`core`]: Core data types for symptoms, conditions, and selections
//! - [`matching`]: Scoring and ranking
//! - [`report`]: Text, JSON, and TSV rendering of results
//! - [`history`]: Append-only selection history log
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod history;
pub mod matching;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::SymptomCatalog;
pub use crate::core::condition::Condition;
pub use crate::core::selection::{Selection, SelectionError};
pub use crate::core::symptom::Symptom;
pub use crate::core::types::*;
pub use crate::matching::engine::{DiagnosisOutcome, MatchingEngine, ScoredResult};
