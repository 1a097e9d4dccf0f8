use serde::Deserialize;

use crate::error::CoreError;
use crate::meaning::title_case;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// One vocabulary entry as uploaded by the user.
///
/// All four fields are required. Extra fields in the source object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub meanings: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl WordRecord {
    /// The headword as it appears on the page.
    pub fn display_title(&self) -> String {
        title_case(self.word.trim())
    }
}

/// Decode an uploaded JSON document into word records.
///
/// The top level must be an array. Every entry needs a non-blank `word`.
/// A leading UTF-8 byte-order mark is skipped.
pub fn parse_word_list(bytes: &[u8]) -> Result<Vec<WordRecord>, CoreError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let records: Vec<WordRecord> = serde_json::from_slice(bytes)?;

    if let Some(index) = records.iter().position(|r| r.word.trim().is_empty()) {
        return Err(CoreError::EmptyWord { index });
    }

    tracing::debug!(count = records.len(), "decoded word list");
    Ok(records)
}
