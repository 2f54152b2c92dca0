use serde::{Deserialize, Serialize};

/// Stable numeric identifier for a symptom in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomId(pub u32);

impl SymptomId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SymptomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SymptomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward so width and alignment flags apply
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Label returned for ids that are not in the catalog
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Line printed after every set of diagnosis results
pub const DISCLAIMER: &str = "NOTE: This program is educational and does NOT replace a doctor.";
