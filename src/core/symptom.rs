use serde::{Deserialize, Serialize};

use crate::core::types::SymptomId;

/// A single observable complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Unique identifier, always > 0
    pub id: SymptomId,

    /// Human-readable label
    pub label: String,
}

impl Symptom {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: SymptomId::new(id),
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}) {}", self.id, self.label)
    }
}
