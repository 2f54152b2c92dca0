use crate::core::condition::Condition;
use crate::core::selection::Selection;
use crate::core::types::SymptomId;

/// Which of a condition's defining symptoms were and were not selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDiagnosis {
    /// Defining symptoms present in the selection, in condition order
    pub matched: Vec<SymptomId>,

    /// Defining symptoms absent from the selection, in condition order
    pub missing: Vec<SymptomId>,
}

impl MatchDiagnosis {
    #[must_use]
    pub fn analyze(condition: &Condition, selection: &Selection) -> Self {
        let (matched, missing) = condition
            .symptoms
            .iter()
            .copied()
            .partition(|&id| selection.contains(id));
        Self { matched, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::SymptomCatalog;

    #[test]
    fn test_analyze_splits_in_condition_order() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let uti = catalog.condition("Urinary tract infection (UTI)").unwrap();

        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(15)).unwrap();
        selection.add(&catalog, SymptomId(16)).unwrap();

        let diagnosis = MatchDiagnosis::analyze(uti, &selection);
        assert_eq!(diagnosis.matched, vec![SymptomId(16), SymptomId(15)]);
        assert_eq!(diagnosis.missing, vec![SymptomId(17), SymptomId(1)]);
    }
}
