//! Core data types for symptom-based condition matching.
//!
//! - [`Symptom`]: A single complaint with a stable numeric id and a label
//! - [`Condition`]: A named condition with its defining symptoms, advice and red flags
//! - [`Selection`]: The symptom ids a user has currently chosen
//! - [`SymptomId`]: Newtype for symptom identifiers
//!
//! [`Symptom`]: symptom::Symptom
//! [`Condition`]: condition::Condition
//! [`Selection`]: selection::Selection
//! [`SymptomId`]: types::SymptomId

pub mod condition;
pub mod selection;
pub mod symptom;
pub mod types;
