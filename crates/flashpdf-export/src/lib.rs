//! flashpdf-export
//!
//! Word records → page blocks → PDF bytes.

pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod styles;

pub use pdf::build_document;
