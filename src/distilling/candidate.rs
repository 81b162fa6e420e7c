//! distilling/candidate.rs
//!
//! One pairing under consideration by a refactoring-detection pass.

use std::sync::Arc;

use crate::distilling::error::CandidateError;
use crate::model::{DiffNode, SourceCodeChange};

/* ============================================================
   Confirmation state
   ============================================================ */

/// Two-state lifecycle of a candidate. The only transition is
/// `Unconfirmed -> Confirmed`; nothing goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirmation {
    Unconfirmed,
    Confirmed,
}

/* ============================================================
   Candidate
   ============================================================ */

/// A source-code change paired with the diff node it came from, held by a
/// detection pass while it searches for the matching counterpart (the
/// delete matching an insert recognizes a move or rename).
///
/// Contract:
/// - both references are fixed at construction and never replaced
/// - the candidate does not own either referent; callers keep them alive
/// - confirmation is one-way (see [`RefactoringCandidate::mark_as_refactoring`])
///
/// Not internally synchronized: callers sharing one candidate across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct RefactoringCandidate {
    change_operation: Arc<SourceCodeChange>,
    diff_node: Arc<DiffNode>,
    confirmation: Confirmation,
}

impl RefactoringCandidate {
    /// Pairs a change with the diff node it was classified from.
    ///
    /// Callers have already judged the change eligible (see
    /// [`SourceCodeChange::is_candidate_material`]); no validation of the
    /// edit kind happens here.
    pub fn new(change_operation: Arc<SourceCodeChange>, diff_node: Arc<DiffNode>) -> Self {
        Self {
            change_operation,
            diff_node,
            confirmation: Confirmation::Unconfirmed,
        }
    }

    /// Like [`RefactoringCandidate::new`], for callers whose inputs arrive
    /// as optional lookups. Fails fast naming the missing side rather than
    /// producing a half-initialized candidate.
    pub fn try_new(
        change_operation: Option<Arc<SourceCodeChange>>,
        diff_node: Option<Arc<DiffNode>>,
    ) -> Result<Self, CandidateError> {
        let change_operation =
            change_operation.ok_or(CandidateError::MissingChangeOperation)?;
        let diff_node = diff_node.ok_or(CandidateError::MissingDiffNode)?;

        Ok(Self::new(change_operation, diff_node))
    }

    /// Records that detection confirmed this pair as part of a
    /// refactoring. Unconditional and idempotent; there is no way to
    /// unconfirm.
    pub fn mark_as_refactoring(&mut self) {
        self.confirmation = Confirmation::Confirmed;
    }

    pub fn change_operation(&self) -> &SourceCodeChange {
        &self.change_operation
    }

    pub fn diff_node(&self) -> &DiffNode {
        &self.diff_node
    }

    pub fn is_refactoring(&self) -> bool {
        self.confirmation == Confirmation::Confirmed
    }
}

/* ============================================================
   Tests
   ============================================================ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EditKind, EntityKind};

    fn insert_change() -> Arc<SourceCodeChange> {
        Arc::new(SourceCodeChange {
            kind: EditKind::Insert,
            entity: EntityKind::Method,
            unique_name: "Foo.bar()".to_string(),
            file: "src/foo.rs".to_string(),
        })
    }

    fn insert_node() -> Arc<DiffNode> {
        Arc::new(DiffNode {
            kind: EditKind::Insert,
            left: None,
            right: Some("Foo.bar()".to_string()),
        })
    }

    #[test]
    fn accessors_return_the_constructed_pair() {
        let change = insert_change();
        let node = insert_node();

        let candidate = RefactoringCandidate::new(change.clone(), node.clone());

        assert_eq!(candidate.change_operation(), change.as_ref());
        assert_eq!(candidate.diff_node(), node.as_ref());
    }

    #[test]
    fn fresh_candidate_is_not_a_refactoring() {
        let candidate = RefactoringCandidate::new(insert_change(), insert_node());
        assert!(!candidate.is_refactoring());
    }

    #[test]
    fn marking_confirms_the_candidate() {
        let mut candidate = RefactoringCandidate::new(insert_change(), insert_node());

        candidate.mark_as_refactoring();
        assert!(candidate.is_refactoring());
    }

    #[test]
    fn marking_twice_changes_nothing_else() {
        let change = insert_change();
        let node = insert_node();
        let mut candidate = RefactoringCandidate::new(change.clone(), node.clone());

        candidate.mark_as_refactoring();
        candidate.mark_as_refactoring();

        assert!(candidate.is_refactoring());
        assert_eq!(candidate.change_operation(), change.as_ref());
        assert_eq!(candidate.diff_node(), node.as_ref());
    }

    #[test]
    fn candidate_shares_rather_than_copies_its_referents() {
        let change = insert_change();
        let node = insert_node();

        let _candidate = RefactoringCandidate::new(change.clone(), node.clone());

        // the caller's Arc and the candidate's point at the same allocation
        assert_eq!(Arc::strong_count(&change), 2);
        assert_eq!(Arc::strong_count(&node), 2);
    }

    #[test]
    fn try_new_rejects_a_missing_change() {
        let result = RefactoringCandidate::try_new(None, Some(insert_node()));
        assert_eq!(result.unwrap_err(), CandidateError::MissingChangeOperation);
    }

    #[test]
    fn try_new_rejects_a_missing_diff_node() {
        let result = RefactoringCandidate::try_new(Some(insert_change()), None);
        assert_eq!(result.unwrap_err(), CandidateError::MissingDiffNode);
    }

    #[test]
    fn try_new_with_both_sides_behaves_like_new() {
        let candidate =
            RefactoringCandidate::try_new(Some(insert_change()), Some(insert_node())).unwrap();

        assert!(!candidate.is_refactoring());
        assert_eq!(candidate.change_operation().unique_name, "Foo.bar()");
    }
}
