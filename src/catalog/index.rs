use std::collections::HashMap;

use crate::core::selection::Selection;

use super::store::SymptomCatalog;

/// Finds conditions that share at least one symptom with a selection
pub struct CandidateFinder<'a> {
    catalog: &'a SymptomCatalog,
}

impl<'a> CandidateFinder<'a> {
    pub fn new(catalog: &'a SymptomCatalog) -> Self {
        Self { catalog }
    }

    /// Count shared symptoms per condition via the inverted index.
    /// Returns (condition index, shared count) pairs in catalog order.
    #[must_use]
    pub fn find_candidates(&self, selection: &Selection) -> Vec<(usize, usize)> {
        let mut condition_counts: HashMap<usize, usize> = HashMap::new();

        for &id in selection.list() {
            for &idx in self.catalog.conditions_with_symptom(id) {
                *condition_counts.entry(idx).or_default() += 1;
            }
        }

        let mut candidates: Vec<_> = condition_counts.into_iter().collect();
        // Catalog order, so the stable ranking sort sees authored order for ties
        candidates.sort_unstable_by_key(|&(idx, _)| idx);
        candidates
    }
}
