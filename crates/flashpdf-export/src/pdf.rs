use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rgb,
};

use flashpdf_core::models::word::WordRecord;

use crate::error::ExportError;
use crate::layout::{Block, EXAMPLE_MARKER, Section, layout_records};
use crate::metrics::{sanitize, text_width, wrap_text};
use crate::styles::{DocumentStyles, FontFace, RgbColor, TextStyle};

const LAYER_NAME: &str = "Content";

/// Build the complete vocabulary PDF for `records`.
///
/// One page group per record, separated by hard page breaks. Either the
/// whole document is returned or an error; there is no partial output.
pub fn build_document(
    records: &[WordRecord],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let blocks = layout_records(records, styles);
    let rendered = generate_pdf(&blocks, styles)?;

    tracing::info!(
        records = records.len(),
        pages = rendered.pages,
        bytes = rendered.bytes.len(),
        "built vocabulary PDF"
    );
    Ok(rendered.bytes)
}

/// A finished PDF and the number of pages it holds.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Render laid-out blocks to PDF bytes.
///
/// Text is wrapped to the space between the margins and flows onto a new
/// page when it reaches the bottom margin.
pub fn generate_pdf(blocks: &[Block], styles: &DocumentStyles) -> Result<RenderedPdf, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        styles.document_title.as_str(),
        pt_to_mm(styles.page_width),
        pt_to_mm(styles.page_height),
        LAYER_NAME,
    );
    let fonts = Fonts::load(&doc)?;

    let pages = {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            styles,
            fonts: &fonts,
            y: styles.page_height - styles.margin,
            pages: 1,
        };
        for block in blocks {
            writer.write_block(block);
        }
        writer.pages
    };

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(RenderedPdf { bytes, pages })
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn fill(color: RgbColor) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, ExportError> {
        let load = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| ExportError::Font(e.to_string()))
        };
        Ok(Self {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
            FontFace::HelveticaOblique => &self.oblique,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Places lines top to bottom, opening pages as needed.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    styles: &'a DocumentStyles,
    fonts: &'a Fonts,
    /// Current baseline, in points from the bottom edge.
    y: f32,
    pages: usize,
}

impl PageWriter<'_> {
    fn write_block(&mut self, block: &Block) {
        let styles = self.styles;
        match block {
            Block::Title(text) => self.paragraph(text, &styles.title, Align::Center, false),
            Block::SectionHeader { section, text } => {
                let style = TextStyle {
                    color: self.section_color(*section),
                    ..styles.section
                };
                self.paragraph(text, &style, Align::Left, false);
            }
            Block::Definition(text) => {
                self.paragraph(text, &styles.definition, Align::Left, false)
            }
            Block::Example { text, bulleted } => {
                self.paragraph(text, &styles.example, Align::Left, *bulleted)
            }
            Block::ListItem { section, text } | Block::Placeholder { section, text } => {
                let style = match section {
                    Section::Synonyms => &styles.synonym,
                    Section::Antonyms => &styles.antonym,
                    Section::Meanings => &styles.definition,
                };
                self.paragraph(text, style, Align::Left, false);
            }
            Block::Spacer(height) => self.y -= height,
            Block::PageBreak => self.new_page(),
        }
    }

    fn section_color(&self, section: Section) -> RgbColor {
        match section {
            Section::Meanings => self.styles.meanings_color,
            Section::Synonyms => self.styles.synonyms_color,
            Section::Antonyms => self.styles.antonyms_color,
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            pt_to_mm(self.styles.page_width),
            pt_to_mm(self.styles.page_height),
            LAYER_NAME,
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.styles.page_height - self.styles.margin;
        self.pages += 1;
    }

    fn at_page_top(&self) -> bool {
        self.y >= self.styles.page_height - self.styles.margin
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle, align: Align, bulleted: bool) {
        let margin = self.styles.margin;
        let indent_x = margin + style.left_indent;
        let text_x = if bulleted {
            indent_x + self.styles.bullet_gap
        } else {
            indent_x
        };
        let max_width = (self.styles.text_width() - (text_x - margin)).max(style.size);

        let text = sanitize(text);
        let font = self.fonts.get(style.font);

        for (i, line) in wrap_text(&text, style.font, style.size, max_width)
            .iter()
            .enumerate()
        {
            if self.y - style.leading < margin && !self.at_page_top() {
                self.new_page();
            }
            self.y -= style.leading;
            let baseline = pt_to_mm(self.y);

            if bulleted && i == 0 {
                self.layer.set_fill_color(fill(self.styles.bullet_color));
                self.layer.use_text(
                    EXAMPLE_MARKER.to_string(),
                    style.size,
                    pt_to_mm(indent_x),
                    baseline,
                    &self.fonts.regular,
                );
            }

            if line.is_empty() {
                continue;
            }
            let x = match align {
                Align::Left => text_x,
                Align::Center => {
                    let width = text_width(line, style.font, style.size);
                    margin + ((self.styles.text_width() - width) / 2.0).max(0.0)
                }
            };
            self.layer.set_fill_color(fill(style.color));
            self.layer
                .use_text(line.as_str(), style.size, pt_to_mm(x), baseline, font);
        }

        self.y -= style.space_after;
    }
}
