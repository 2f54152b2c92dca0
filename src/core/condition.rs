use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::types::SymptomId;

/// A named condition defined by a set of symptoms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ConditionData")]
pub struct Condition {
    /// Unique display name
    pub name: String,

    /// Defining symptoms, in authored order
    pub symptoms: Vec<SymptomId>,

    /// What to do / treatment info
    pub advice: String,

    /// Red flags: when to see a doctor urgently
    pub danger: String,

    // === Pre-computed for fast matching (populated on load) ===
    /// Set of defining symptom ids
    #[serde(skip)]
    symptom_set: HashSet<SymptomId>,
}

/// Serialized shape of a condition; the membership set is rebuilt on conversion
#[derive(Deserialize)]
struct ConditionData {
    name: String,
    symptoms: Vec<SymptomId>,
    advice: String,
    danger: String,
}

impl From<ConditionData> for Condition {
    fn from(data: ConditionData) -> Self {
        let mut condition = Self {
            name: data.name,
            symptoms: data.symptoms,
            advice: data.advice,
            danger: data.danger,
            symptom_set: HashSet::new(),
        };
        condition.rebuild_indexes();
        condition
    }
}

impl Condition {
    pub fn new(
        name: impl Into<String>,
        symptoms: impl IntoIterator<Item = u32>,
        advice: impl Into<String>,
        danger: impl Into<String>,
    ) -> Self {
        let mut condition = Self {
            name: name.into(),
            symptoms: symptoms.into_iter().map(SymptomId::new).collect(),
            advice: advice.into(),
            danger: danger.into(),
            symptom_set: HashSet::new(),
        };
        condition.rebuild_indexes();
        condition
    }

    /// Rebuild the membership set after modifying `symptoms`
    pub fn rebuild_indexes(&mut self) {
        self.symptom_set = self.symptoms.iter().copied().collect();
    }

    /// Number of distinct defining symptoms
    #[must_use]
    pub fn symptom_count(&self) -> usize {
        self.symptom_set.len()
    }

    #[must_use]
    pub fn has_symptom(&self, id: SymptomId) -> bool {
        self.symptom_set.contains(&id)
    }
}
