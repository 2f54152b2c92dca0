use crate::core::condition::Condition;
use crate::core::selection::Selection;

/// Safely convert usize to f64 for percentage calculations
///
/// Symptom counts are tiny, far inside the exact integer range of f64.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// How much of a condition's definition a selection covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    /// Defining symptoms present in the selection
    pub matched_count: usize,

    /// Total defining symptoms of the condition
    pub total: usize,

    /// `100 * matched_count / total`, unrounded
    pub percent: f64,
}

impl MatchScore {
    #[must_use]
    pub fn calculate(condition: &Condition, selection: &Selection) -> Self {
        let matched_count = score(condition, selection);
        Self {
            matched_count,
            total: condition.symptom_count(),
            percent: percent_of(matched_count, condition.symptom_count()),
        }
    }
}

/// Number of the condition's defining symptoms present in the selection
#[must_use]
pub fn score(condition: &Condition, selection: &Selection) -> usize {
    selection
        .list()
        .iter()
        .filter(|&&id| condition.has_symptom(id))
        .count()
}

/// Match count as a percentage of the condition's defining symptoms.
///
/// Returns 0.0 for a condition with no symptoms.
#[must_use]
pub fn percent_match(condition: &Condition, selection: &Selection) -> f64 {
    percent_of(score(condition, selection), condition.symptom_count())
}

fn percent_of(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count_to_f64(matched) / count_to_f64(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::SymptomCatalog;
    use crate::core::types::SymptomId;

    fn select(catalog: &SymptomCatalog, ids: &[u32]) -> Selection {
        let mut selection = Selection::new();
        for &id in ids {
            selection.add(catalog, SymptomId(id)).unwrap();
        }
        selection
    }

    #[test]
    fn test_cough_against_common_cold() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let cold = catalog.condition("Common cold").unwrap();
        let selection = select(&catalog, &[2]);

        assert_eq!(score(cold, &selection), 1);
        assert!((percent_match(cold, &selection) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_match() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let covid = catalog.condition("COVID-like viral infection").unwrap();
        let selection = select(&catalog, &[13, 11, 6, 2, 1]);

        let s = MatchScore::calculate(covid, &selection);
        assert_eq!(s.matched_count, 5);
        assert_eq!(s.total, 5);
        assert!((s.percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_keeps_full_precision() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let allergy = catalog.condition("Allergy (rhinitis/conjunctivitis)").unwrap();
        let selection = select(&catalog, &[4]);

        assert!((percent_match(allergy, &selection) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let cardiac = catalog.condition("Possible cardiac emergency").unwrap();
        let selection = select(&catalog, &[2, 3, 4]);

        assert_eq!(score(cardiac, &selection), 0);
        assert!(percent_match(cardiac, &selection).abs() < 1e-9);
    }

    #[test]
    fn test_empty_condition_scores_zero_percent() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let empty = Condition::new("Nothing", Vec::<u32>::new(), "", "");
        let selection = select(&catalog, &[1, 2]);

        assert_eq!(score(&empty, &selection), 0);
        assert!(percent_match(&empty, &selection).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded_by_condition_size() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let everything: Vec<u32> = (1..=20).collect();
        let selection = select(&catalog, &everything);

        for condition in catalog.list_conditions() {
            let s = MatchScore::calculate(condition, &selection);
            assert_eq!(s.matched_count, condition.symptom_count());
            assert!((s.percent - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deserialized_condition_scores_overlap() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let json = r#"{"name":"Chesty cough","symptoms":[2,3],"advice":"a","danger":"d"}"#;
        let condition: Condition = serde_json::from_str(json).unwrap();
        let selection = select(&catalog, &[2]);

        let s = MatchScore::calculate(&condition, &selection);
        assert_eq!(s.matched_count, 1);
        assert_eq!(s.total, 2);
        assert!((s.percent - 50.0).abs() < 1e-9);
    }
}
