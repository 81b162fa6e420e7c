//! codedistill
//!
//! Data model for a change-distillation pipeline: the vocabulary of
//! detected source-code edits, and the refactoring-candidate container a
//! detection pass uses to track insert/delete pairs while it looks for
//! their counterparts.
//!
//! The tree-comparison engine and the refactoring-detection pass itself
//! live outside this crate; they only exchange the types defined here.

pub mod distilling;
pub mod model;

pub use distilling::candidate::RefactoringCandidate;
pub use distilling::error::CandidateError;
pub use model::{DiffNode, EditKind, EntityKind, SourceCodeChange};
