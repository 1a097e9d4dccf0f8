use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Built-in PDF font used for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

/// Colour as 8-bit RGB components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::from_hex(0x000000);

    /// Build a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// How example sentences are placed under their definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleLayout {
    /// Every example as an indented bullet.
    #[default]
    Bulleted,
    /// Only the first example, inlined directly beneath the definition.
    Inline,
}

impl FromStr for ExampleLayout {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bulleted" | "bullets" => Ok(ExampleLayout::Bulleted),
            "inline" => Ok(ExampleLayout::Inline),
            other => Err(ExportError::UnknownLayout(other.to_string())),
        }
    }
}

/// Typography of one kind of line. Sizes are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontFace,
    pub size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    /// Extra space below the last line.
    pub space_after: f32,
    pub left_indent: f32,
    pub color: RgbColor,
}

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// PDF metadata title.
    pub document_title: String,

    /// Page width in points (A4 by default).
    pub page_width: f32,

    /// Page height in points.
    pub page_height: f32,

    /// Page margin in points (applied uniformly).
    pub margin: f32,

    pub example_layout: ExampleLayout,

    /// Centered headword at the top of each record.
    pub title: TextStyle,

    /// "Meanings" / "Synonyms" / "Antonyms" headers. The colour is
    /// replaced by the section colour.
    pub section: TextStyle,

    pub definition: TextStyle,
    pub example: TextStyle,
    pub synonym: TextStyle,
    pub antonym: TextStyle,

    pub meanings_color: RgbColor,
    pub synonyms_color: RgbColor,
    pub antonyms_color: RgbColor,

    /// Colour of the bullet glyph in front of examples.
    pub bullet_color: RgbColor,

    /// Horizontal gap between an example bullet and its text.
    pub bullet_gap: f32,
}

const INDIGO: RgbColor = RgbColor::from_hex(0x1a237e);
const GREEN: RgbColor = RgbColor::from_hex(0x1b5e20);
const RED: RgbColor = RgbColor::from_hex(0xb71c1c);
const GREY: RgbColor = RgbColor::from_hex(0x9e9e9e);

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            document_title: "Vocabulary".to_string(),
            page_width: 595.28,
            page_height: 841.89,
            margin: 72.0,
            example_layout: ExampleLayout::default(),
            title: TextStyle {
                font: FontFace::HelveticaBold,
                size: 28.0,
                leading: 32.0,
                space_after: 22.0,
                left_indent: 0.0,
                color: INDIGO,
            },
            section: TextStyle {
                font: FontFace::HelveticaBold,
                size: 16.0,
                leading: 24.0,
                space_after: 10.0,
                left_indent: 0.0,
                color: RgbColor::BLACK,
            },
            definition: TextStyle {
                font: FontFace::HelveticaBold,
                size: 12.0,
                leading: 20.0,
                space_after: 6.0,
                left_indent: 0.0,
                color: RgbColor::BLACK,
            },
            example: TextStyle {
                font: FontFace::HelveticaOblique,
                size: 11.0,
                leading: 18.0,
                space_after: 4.0,
                left_indent: 20.0,
                color: RgbColor::BLACK,
            },
            synonym: TextStyle {
                font: FontFace::Helvetica,
                size: 12.0,
                leading: 20.0,
                space_after: 0.0,
                left_indent: 15.0,
                color: GREEN,
            },
            antonym: TextStyle {
                font: FontFace::Helvetica,
                size: 12.0,
                leading: 20.0,
                space_after: 0.0,
                left_indent: 15.0,
                color: RED,
            },
            meanings_color: INDIGO,
            synonyms_color: GREEN,
            antonyms_color: RED,
            bullet_color: GREY,
            bullet_gap: 12.0,
        }
    }
}

impl DocumentStyles {
    /// Width available to text between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}
