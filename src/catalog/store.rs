use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::core::condition::Condition;
use crate::core::symptom::Symptom;
use crate::core::types::{SymptomId, UNKNOWN_LABEL};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Symptom at index {index} has id 0; symptom ids must be > 0")]
    ZeroSymptomId { index: usize },

    #[error("Duplicate symptom id {0}")]
    DuplicateSymptomId(SymptomId),

    #[error("Symptom {0} has an empty label")]
    EmptyLabel(SymptomId),

    #[error("Condition at index {index} has an empty name")]
    EmptyConditionName { index: usize },

    #[error("Duplicate condition name '{0}'")]
    DuplicateCondition(String),

    #[error("Condition '{0}' has no symptoms")]
    NoSymptoms(String),

    #[error("Condition '{condition}' lists symptom {symptom} more than once")]
    DuplicateConditionSymptom { condition: String, symptom: SymptomId },

    #[error("Condition '{condition}' references unknown symptom {symptom}")]
    UnknownSymptomReference { condition: String, symptom: SymptomId },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

/// Immutable symptom and condition reference data.
///
/// Both lists keep their authored order. Condition order is the final
/// tie-break when ranking, so reordering the catalog changes output.
#[derive(Debug)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,

    /// Index: symptom ID -> index in symptoms vec
    id_to_index: HashMap<SymptomId, usize>,

    /// Index: symptom ID -> indices of conditions containing it, ascending
    symptom_to_conditions: HashMap<SymptomId, Vec<usize>>,
}

impl SymptomCatalog {
    /// Build a catalog, validating referential integrity.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` describing the first integrity violation found.
    pub fn new(symptoms: Vec<Symptom>, conditions: Vec<Condition>) -> Result<Self, CatalogError> {
        let mut id_to_index = HashMap::with_capacity(symptoms.len());
        for (index, symptom) in symptoms.iter().enumerate() {
            if symptom.id.get() == 0 {
                return Err(CatalogError::ZeroSymptomId { index });
            }
            if symptom.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel(symptom.id));
            }
            if id_to_index.insert(symptom.id, index).is_some() {
                return Err(CatalogError::DuplicateSymptomId(symptom.id));
            }
        }

        let mut names = HashSet::with_capacity(conditions.len());
        let mut symptom_to_conditions: HashMap<SymptomId, Vec<usize>> = HashMap::new();
        let mut validated = Vec::with_capacity(conditions.len());

        for (index, mut condition) in conditions.into_iter().enumerate() {
            if condition.name.trim().is_empty() {
                return Err(CatalogError::EmptyConditionName { index });
            }
            if !names.insert(condition.name.to_lowercase()) {
                return Err(CatalogError::DuplicateCondition(condition.name));
            }
            if condition.symptoms.is_empty() {
                return Err(CatalogError::NoSymptoms(condition.name));
            }

            let mut seen = HashSet::with_capacity(condition.symptoms.len());
            for &symptom in &condition.symptoms {
                if !id_to_index.contains_key(&symptom) {
                    return Err(CatalogError::UnknownSymptomReference {
                        condition: condition.name,
                        symptom,
                    });
                }
                if !seen.insert(symptom) {
                    return Err(CatalogError::DuplicateConditionSymptom {
                        condition: condition.name,
                        symptom,
                    });
                }
                symptom_to_conditions.entry(symptom).or_default().push(index);
            }

            condition.rebuild_indexes();
            validated.push(condition);
        }

        Ok(Self {
            symptoms,
            conditions: validated,
            id_to_index,
            symptom_to_conditions,
        })
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data is invalid, which `build.rs` prevents.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/symptoms.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let catalog = Self::new(data.symptoms, data.conditions)?;
        tracing::debug!(
            symptoms = catalog.symptoms.len(),
            conditions = catalog.conditions.len(),
            "Loaded symptom catalog"
        );
        Ok(catalog)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            symptoms: self.symptoms.clone(),
            conditions: self.conditions.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// All symptoms in display order
    #[must_use]
    pub fn list_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// All conditions in authored order
    #[must_use]
    pub fn list_conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn symptom_exists(&self, id: SymptomId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    /// Get a symptom by ID
    #[must_use]
    pub fn symptom(&self, id: SymptomId) -> Option<&Symptom> {
        self.id_to_index.get(&id).map(|&idx| &self.symptoms[idx])
    }

    /// Label for a symptom, or `"Unknown"` if the id is not in the catalog
    #[must_use]
    pub fn symptom_label(&self, id: SymptomId) -> &str {
        self.symptom(id).map_or(UNKNOWN_LABEL, |s| s.label.as_str())
    }

    /// Find a condition by name, ignoring ASCII case
    #[must_use]
    pub fn condition(&self, name: &str) -> Option<&Condition> {
        let name = name.trim();
        self.conditions
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Indices of conditions that list this symptom, in catalog order
    #[must_use]
    pub fn conditions_with_symptom(&self, id: SymptomId) -> &[usize] {
        self.symptom_to_conditions
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of conditions in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Check if catalog has no conditions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
