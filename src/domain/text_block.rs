/// Granularity tag the OCR service attaches to each recognized block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    Page,
    Line,
    Word,
    Other(String),
}

impl BlockType {
    pub fn parse(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "PAGE" => Self::Page,
            "LINE" => Self::Line,
            "WORD" => Self::Word,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub block_type: BlockType,
    pub text: String,
}

impl TextBlock {
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            block_type,
            text: text.into(),
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self::new(BlockType::Line, text)
    }
}
