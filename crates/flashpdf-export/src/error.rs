use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("font unavailable: {0}")]
    Font(String),

    #[error("unknown example layout: {0}")]
    UnknownLayout(String),
}
