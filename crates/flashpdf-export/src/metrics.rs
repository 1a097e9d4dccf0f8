//! Glyph widths for the built-in Helvetica faces and greedy line wrapping.
//!
//! The standard 14 PDF fonts are not embedded, so their widths come from the
//! Adobe AFM tables (units of 1/1000 em). Oblique shares the regular widths.

use crate::styles::FontFace;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Fallback for characters outside printable ASCII.
const DEFAULT_WIDTH: u16 = 556;
const BULLET_WIDTH: u16 = 350;

fn glyph_width(font: FontFace, c: char) -> u16 {
    let table = match font {
        FontFace::HelveticaBold => &HELVETICA_BOLD,
        FontFace::Helvetica | FontFace::HelveticaOblique => &HELVETICA,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        '\u{2022}' => BULLET_WIDTH,
        _ => DEFAULT_WIDTH,
    }
}

/// Rendered width of `text` in points.
pub fn text_width(text: &str, font: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(font, c))).sum();
    units as f32 * size / 1000.0
}

/// Characters outside Latin-1 that WinAnsiEncoding still maps.
const WIN_ANSI_EXTRA: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Replace what the built-in fonts cannot draw.
///
/// Whitespace becomes a plain space and anything outside WinAnsiEncoding
/// becomes `?`.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            c if c.is_whitespace() => ' ',
            ' '..='~' | '\u{00A0}'..='\u{00FF}' => c,
            c if WIN_ANSI_EXTRA.contains(c) => c,
            _ => '?',
        })
        .collect()
}

/// Greedily wrap `text` into lines no wider than `max_width` points.
///
/// Words wider than a full line are split between characters. Always
/// returns at least one line.
pub fn wrap_text(text: &str, font: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", font, size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = text_width(word, font, size);

        if !current.is_empty() && current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        current_width = 0.0;
        for c in word.chars() {
            let w = f32::from(glyph_width(font, c)) * size / 1000.0;
            if !current.is_empty() && current_width + w > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
