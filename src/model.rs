//! model.rs
//!
//! Vocabulary shared between the tree-comparison side and the
//! change-distillation side. Plain data, no behavior beyond the
//! candidate-eligibility predicate.

use serde::{Deserialize, Serialize};

/* ---------- edit classification ---------- */

/// How a tree-comparison engine classified one located difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Insert,
    Delete,
    Move,
    Update,
}

/// Program-entity kinds that can take part in a refactoring candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Method,
    Attribute,
}

/* ---------- semantic change record ---------- */

/// One semantic edit between two versions of a source artifact, as emitted
/// by an external change-classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCodeChange {
    pub kind: EditKind,
    pub entity: EntityKind,

    /// Fully qualified name of the changed entity.
    pub unique_name: String,

    pub file: String,
}

impl SourceCodeChange {
    /// Whether this change can seed a refactoring candidate.
    ///
    /// Only inserts and deletes qualify: a move or rename shows up as an
    /// insert on one side and a delete on the other, and detection works
    /// by pairing those back up. Callers make this judgment before
    /// constructing a candidate; the constructor does not repeat it.
    pub fn is_candidate_material(&self) -> bool {
        matches!(self.kind, EditKind::Insert | EditKind::Delete)
    }
}

/* ---------- structural diff node ---------- */

/// One located structural difference from the tree comparison.
///
/// `left` is the element on the old side, `right` on the new side; an
/// insert has no `left`, a delete has no `right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffNode {
    pub kind: EditKind,
    pub left: Option<String>,
    pub right: Option<String>,
}

/* ---------- tests ---------- */
