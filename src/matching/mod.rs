//! Condition scoring and ranking.
//!
//! - [`MatchingEngine`]: Ranks catalog conditions against a selection
//! - [`MatchScore`]: Match count and percentage for one condition
//! - [`MatchDiagnosis`]: Which defining symptoms were matched or missing
//!
//! ## Ranking
//!
//! 1. An empty selection yields [`DiagnosisOutcome::NoSelection`]
//! 2. Conditions sharing no symptom with the selection are dropped
//! 3. Results sort by matched count descending, then percentage descending
//! 4. Full ties keep catalog order (the sort is stable)
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_checker::{MatchingEngine, Selection, SymptomCatalog};
//! use symptom_checker::core::types::SymptomId;
//!
//! let catalog = SymptomCatalog::load_embedded().unwrap();
//! let mut selection = Selection::new();
//! selection.add(&catalog, SymptomId::new(1)).unwrap();
//! selection.add(&catalog, SymptomId::new(2)).unwrap();
//!
//! let engine = MatchingEngine::new(&catalog);
//! for (rank, result) in engine.diagnose(&selection).iter().enumerate() {
//!     println!("{}) {} {:.1}%", rank + 1, result.condition.name, result.percent());
//! }
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`MatchScore`]: scoring::MatchScore
//! [`MatchDiagnosis`]: diagnosis::MatchDiagnosis
//! [`DiagnosisOutcome::NoSelection`]: engine::DiagnosisOutcome::NoSelection

pub mod diagnosis;
pub mod engine;
pub mod scoring;

pub use engine::{diagnose, DiagnosisOutcome};
