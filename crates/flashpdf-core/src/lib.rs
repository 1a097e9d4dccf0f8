//! flashpdf-core
//!
//! Vocabulary domain types and the meaning-line splitter.
//! No rendering dependency — this is the shared vocabulary of the flashpdf system.

pub mod error;
pub mod meaning;
pub mod models;
