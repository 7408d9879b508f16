use super::text_block::{BlockType, TextBlock};

/// Recognized lines of a document, in the order the OCR service reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    lines: Vec<String>,
}

impl ExtractedDocument {
    pub fn from_blocks(blocks: &[TextBlock]) -> Self {
        let lines = blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Line)
            .map(|b| b.text.clone())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
