use std::cmp::Ordering;

use crate::catalog::index::CandidateFinder;
use crate::catalog::store::SymptomCatalog;
use crate::core::condition::Condition;
use crate::core::selection::Selection;
use crate::matching::diagnosis::MatchDiagnosis;
use crate::matching::scoring::MatchScore;

/// A condition scored against one selection
#[derive(Debug, Clone)]
pub struct ScoredResult {
    /// The matched condition
    pub condition: Condition,

    /// Match count and percentage
    pub score: MatchScore,

    /// Matched and missing defining symptoms
    pub diagnosis: MatchDiagnosis,
}

impl ScoredResult {
    pub fn new(condition: &Condition, selection: &Selection) -> Self {
        Self {
            condition: condition.clone(),
            score: MatchScore::calculate(condition, selection),
            diagnosis: MatchDiagnosis::analyze(condition, selection),
        }
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.score.matched_count
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.score.percent
    }
}

/// Result of a diagnosis request, keeping "nothing selected" apart from
/// "nothing matched"
#[derive(Debug, Clone)]
pub enum DiagnosisOutcome {
    /// The selection was empty
    NoSelection,
    /// Symptoms were selected but no condition shares any of them
    NoMatches,
    /// Ranked results, best first
    Matches(Vec<ScoredResult>),
}

impl DiagnosisOutcome {
    /// Ranked results, empty for both non-match outcomes
    #[must_use]
    pub fn into_results(self) -> Vec<ScoredResult> {
        match self {
            Self::Matches(results) => results,
            Self::NoSelection | Self::NoMatches => Vec::new(),
        }
    }
}

/// Default minimum number of matched symptoms for a condition to be reported
pub const DEFAULT_MIN_MATCHED: usize = 1;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Minimum matched symptoms; values below 1 are treated as 1
    pub min_matched: usize,
    /// Keep only the first N ranked results; values below 1 are treated as 1
    pub max_results: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_matched: DEFAULT_MIN_MATCHED,
            max_results: None,
        }
    }
}

/// Ranks catalog conditions against a selection
pub struct MatchingEngine<'a> {
    catalog: &'a SymptomCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a SymptomCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a SymptomCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Score and rank every condition sharing a symptom with the selection
    #[must_use]
    pub fn evaluate(&self, selection: &Selection) -> DiagnosisOutcome {
        if selection.is_empty() {
            return DiagnosisOutcome::NoSelection;
        }

        let min_matched = self.config.min_matched.max(1);
        let finder = CandidateFinder::new(self.catalog);
        let candidates = finder.find_candidates(selection);
        tracing::debug!(
            selected = selection.len(),
            candidates = candidates.len(),
            "Scoring candidate conditions"
        );

        let conditions = self.catalog.list_conditions();
        let mut results: Vec<ScoredResult> = candidates
            .into_iter()
            .filter(|&(_, shared)| shared >= min_matched)
            .map(|(idx, _)| ScoredResult::new(&conditions[idx], selection))
            .collect();

        // Stable: full ties keep catalog order
        results.sort_by(rank_order);

        if let Some(max) = self.config.max_results {
            results.truncate(max.max(1));
        }

        if results.is_empty() {
            DiagnosisOutcome::NoMatches
        } else {
            DiagnosisOutcome::Matches(results)
        }
    }

    /// Ranked results for a selection; empty when nothing is selected or matched
    #[must_use]
    pub fn diagnose(&self, selection: &Selection) -> Vec<ScoredResult> {
        self.evaluate(selection).into_results()
    }
}

/// Rank a selection against the catalog with default configuration
#[must_use]
pub fn diagnose(catalog: &SymptomCatalog, selection: &Selection) -> Vec<ScoredResult> {
    MatchingEngine::new(catalog).diagnose(selection)
}

/// More matched symptoms first, then higher percentage
fn rank_order(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .matched_count
        .cmp(&a.score.matched_count)
        .then_with(|| b.score.percent.total_cmp(&a.score.percent))
}
