use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::application::ports::{ReportRenderError, ReportRenderer};

use super::text_wrap::wrap_text;

// A4 in points, 10mm margins and line height.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 28;
const LINE_HEIGHT: i64 = 28;
const FONT_SIZE: i64 = 12;
const FONT_NAME: &str = "Helvetica";

/// Average Helvetica glyph width is roughly half the font size.
const AVG_GLYPH_WIDTH: i64 = FONT_SIZE / 2;

pub const CHARS_PER_LINE: usize = ((PAGE_WIDTH - 2 * MARGIN) / AVG_GLYPH_WIDTH) as usize;
pub const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LINE_HEIGHT) as usize;

/// Plain-text PDF writer using a built-in Type1 font, so nothing is embedded.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn page_content(lines: &[String]) -> Content {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), Object::Integer(FONT_SIZE)]),
            Operation::new("TL", vec![Object::Integer(LINE_HEIGHT)]),
            Operation::new(
                "Td",
                vec![
                    Object::Integer(MARGIN),
                    Object::Integer(PAGE_HEIGHT - MARGIN - FONT_SIZE),
                ],
            ),
        ];

        for line in lines {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(to_latin1(line))],
            ));
            operations.push(Operation::new("T*", vec![]));
        }

        operations.push(Operation::new("ET", vec![]));
        Content { operations }
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>, ReportRenderError> {
        let lines = wrap_text(text, CHARS_PER_LINE);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => FONT_NAME,
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<ObjectId> = Vec::new();
        let mut chunks: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for chunk in chunks {
            let encoded = Self::page_content(chunk)
                .encode()
                .map_err(|e| ReportRenderError::RenderFailed(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id);
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => Object::Integer(kids.len() as i64),
            "Kids" => kids.into_iter().map(Object::from).collect::<Vec<_>>(),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ReportRenderError::RenderFailed(e.to_string()))?;

        tracing::debug!(
            lines = lines.len(),
            bytes = buffer.len(),
            "Feedback report rendered"
        );

        Ok(buffer)
    }
}

/// WinAnsi covers Latin-1 closely enough; anything wider is replaced.
fn to_latin1(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
