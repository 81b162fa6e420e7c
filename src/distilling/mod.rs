//! distilling/mod.rs
//!
//! Containers used while distilling classified changes into higher-level
//! findings such as moves and renames.

pub mod candidate;
pub mod error;
