use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::store::SymptomCatalog;
use crate::core::types::SymptomId;

/// Recoverable, user-facing failures when changing a selection
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No such symptom: {0}")]
    UnknownSymptom(SymptomId),

    #[error("Symptom {0} is already selected")]
    AlreadyPresent(SymptomId),

    #[error("Symptom {0} is not in the selection")]
    NotPresent(SymptomId),
}

/// The symptom ids a user has chosen during one session.
///
/// Keeps insertion order for display and a set for order-independent
/// membership tests. Never holds duplicates or ids unknown to the catalog
/// it was filled from.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<SymptomId>,
    members: HashSet<SymptomId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symptom id.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownSymptom` if the catalog has no such
    /// symptom, or `SelectionError::AlreadyPresent` if it is already selected.
    pub fn add(&mut self, catalog: &SymptomCatalog, id: SymptomId) -> Result<(), SelectionError> {
        if !catalog.symptom_exists(id) {
            return Err(SelectionError::UnknownSymptom(id));
        }
        if !self.members.insert(id) {
            return Err(SelectionError::AlreadyPresent(id));
        }
        self.ids.push(id);
        Ok(())
    }

    /// Remove a previously added symptom id.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NotPresent` if the id was never added.
    pub fn remove(&mut self, id: SymptomId) -> Result<(), SelectionError> {
        if !self.members.remove(&id) {
            return Err(SelectionError::NotPresent(id));
        }
        self.ids.retain(|&existing| existing != id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.members.clear();
    }

    /// Current contents in insertion order
    #[must_use]
    pub fn list(&self) -> &[SymptomId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: SymptomId) -> bool {
        self.members.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SymptomCatalog {
        SymptomCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let catalog = catalog();
        let mut selection = Selection::new();

        for id in [13, 2, 6] {
            selection.add(&catalog, SymptomId(id)).unwrap();
        }

        assert_eq!(selection.list(), &[SymptomId(13), SymptomId(2), SymptomId(6)]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let catalog = catalog();
        let mut selection = Selection::new();

        selection.add(&catalog, SymptomId(2)).unwrap();
        let before = selection.list().to_vec();

        let err = selection.add(&catalog, SymptomId(2)).unwrap_err();
        assert_eq!(err, SelectionError::AlreadyPresent(SymptomId(2)));
        assert_eq!(selection.list(), before.as_slice());
    }

    #[test]
    fn test_add_unknown_symptom() {
        let catalog = catalog();
        let mut selection = Selection::new();

        let err = selection.add(&catalog, SymptomId(99)).unwrap_err();
        assert_eq!(err, SelectionError::UnknownSymptom(SymptomId(99)));

        let err = selection.add(&catalog, SymptomId(0)).unwrap_err();
        assert_eq!(err, SelectionError::UnknownSymptom(SymptomId(0)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(1)).unwrap();
        selection.add(&catalog, SymptomId(5)).unwrap();
        selection.add(&catalog, SymptomId(9)).unwrap();

        selection.remove(SymptomId(5)).unwrap();
        assert_eq!(selection.list(), &[SymptomId(1), SymptomId(9)]);
        assert!(!selection.contains(SymptomId(5)));

        // Can be added again after removal
        selection.add(&catalog, SymptomId(5)).unwrap();
        assert_eq!(selection.list(), &[SymptomId(1), SymptomId(9), SymptomId(5)]);
    }

    #[test]
    fn test_remove_not_present() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(3)).unwrap();

        let err = selection.remove(SymptomId(99)).unwrap_err();
        assert_eq!(err, SelectionError::NotPresent(SymptomId(99)));
        assert_eq!(selection.list(), &[SymptomId(3)]);
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(3)).unwrap();
        selection.add(&catalog, SymptomId(4)).unwrap();

        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains(SymptomId(3)));

        // Clearing an empty selection is fine too
        selection.clear();
        assert!(selection.list().is_empty());
    }
}
