//! distilling/error.rs

use thiserror::Error;

/// A candidate could not be constructed. The only failure this layer can
/// produce: one of the two required references was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("refactoring candidate requires a source code change")]
    MissingChangeOperation,

    #[error("refactoring candidate requires a diff node")]
    MissingDiffNode,
}
