use flashpdf_core::meaning::parse_meaning;
use flashpdf_core::models::word::WordRecord;

use crate::styles::{DocumentStyles, ExampleLayout};

pub const MEANINGS_HEADER: &str = "Meanings";
pub const SYNONYMS_HEADER: &str = "Synonyms";
pub const ANTONYMS_HEADER: &str = "Antonyms";
pub const NO_SYNONYMS: &str = "No synonyms provided.";
pub const NO_ANTONYMS: &str = "No antonyms provided.";

/// Bullet in front of synonym and antonym lines.
pub const BULLET: char = '\u{2022}';

/// Marker in front of example sentences.
pub const EXAMPLE_MARKER: char = '\u{00BB}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Meanings,
    Synonyms,
    Antonyms,
}

/// One unit of page content, in reading order.
///
/// Produced by [`layout_records`] and consumed by the PDF renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Centered headword.
    Title(String),
    SectionHeader { section: Section, text: String },
    Definition(String),
    /// An example sentence. `bulleted` is false for the inline layout.
    Example { text: String, bulleted: bool },
    /// A synonym or antonym line, bullet included.
    ListItem { section: Section, text: String },
    /// "No synonyms provided." and friends.
    Placeholder { section: Section, text: String },
    /// Vertical gap in points.
    Spacer(f32),
    PageBreak,
}

/// Lay out every record in order, with a page break between consecutive records.
pub fn layout_records(records: &[WordRecord], styles: &DocumentStyles) -> Vec<Block> {
    let mut blocks = Vec::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }
        layout_record(record, styles.example_layout, &mut blocks);
    }

    blocks
}

fn layout_record(record: &WordRecord, example_layout: ExampleLayout, blocks: &mut Vec<Block>) {
    blocks.push(Block::Title(record.display_title()));
    blocks.push(Block::Spacer(4.0));

    blocks.push(Block::SectionHeader {
        section: Section::Meanings,
        text: MEANINGS_HEADER.to_string(),
    });
    for raw in &record.meanings {
        let parsed = parse_meaning(raw);
        blocks.push(Block::Definition(parsed.definition));

        let examples = match example_layout {
            ExampleLayout::Bulleted => &parsed.examples[..],
            ExampleLayout::Inline => &parsed.examples[..parsed.examples.len().min(1)],
        };
        for example in examples {
            blocks.push(Block::Example {
                text: example.clone(),
                bulleted: example_layout == ExampleLayout::Bulleted,
            });
        }
        blocks.push(Block::Spacer(6.0));
    }
    blocks.push(Block::Spacer(10.0));

    push_term_list(Section::Synonyms, SYNONYMS_HEADER, &record.synonyms, NO_SYNONYMS, blocks);
    blocks.push(Block::Spacer(10.0));

    push_term_list(Section::Antonyms, ANTONYMS_HEADER, &record.antonyms, NO_ANTONYMS, blocks);
    blocks.push(Block::Spacer(16.0));
}

fn push_term_list(
    section: Section,
    header: &str,
    terms: &[String],
    placeholder: &str,
    blocks: &mut Vec<Block>,
) {
    blocks.push(Block::SectionHeader {
        section,
        text: header.to_string(),
    });

    if terms.is_empty() {
        blocks.push(Block::Placeholder {
            section,
            text: placeholder.to_string(),
        });
        return;
    }

    for term in terms {
        blocks.push(Block::ListItem {
            section,
            text: format!("{BULLET} {}", term.trim()),
        });
    }
}
