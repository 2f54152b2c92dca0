//! Symptom and condition catalog storage and indexing.
//!
//! The catalog holds the known symptoms and the conditions they define. It is
//! built once at startup and never mutated. An embedded catalog is compiled
//! into the binary, but custom catalogs can also be loaded from JSON files.
//!
//! ## Ordering
//!
//! Symptoms and conditions keep the order in which they were authored. The
//! symptom order is the display order; the condition order is the final
//! tie-break when two conditions rank identically. Editing the order of
//! `catalogs/symptoms.json` changes ranking output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_checker::SymptomCatalog;
//! use symptom_checker::core::types::SymptomId;
//!
//! let catalog = SymptomCatalog::load_embedded().unwrap();
//!
//! for symptom in catalog.list_symptoms() {
//!     println!("{symptom}");
//! }
//!
//! assert_eq!(catalog.symptom_label(SymptomId::new(2)), "Cough");
//! assert_eq!(catalog.symptom_label(SymptomId::new(999)), "Unknown");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use symptom_checker::SymptomCatalog;
//! use std::path::Path;
//!
//! let catalog = SymptomCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = SymptomCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod index;
pub mod store;
