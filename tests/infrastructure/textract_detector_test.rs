use aws_sdk_textract::types::{Block, BlockType as SdkBlockType};

use safework::domain::{BlockType, ExtractedDocument};
use safework::infrastructure::ocr::to_text_block;

#[test]
fn given_sdk_line_block_when_converting_then_keeps_type_and_text() {
    let block = Block::builder()
        .block_type(SdkBlockType::Line)
        .text("Loose guardrail on platform 3")
        .build();

    let converted = to_text_block(&block);

    assert_eq!(converted.block_type, BlockType::Line);
    assert_eq!(converted.text, "Loose guardrail on platform 3");
}

#[test]
fn given_sdk_page_block_without_text_when_converting_then_text_is_empty() {
    let block = Block::builder().block_type(SdkBlockType::Page).build();

    let converted = to_text_block(&block);

    assert_eq!(converted.block_type, BlockType::Page);
    assert_eq!(converted.text, "");
}

#[test]
fn given_textract_style_response_when_extracting_then_only_lines_survive_in_order() {
    let blocks = [
        Block::builder().block_type(SdkBlockType::Page).build(),
        Block::builder().block_type(SdkBlockType::Line).text("Line one").build(),
        Block::builder().block_type(SdkBlockType::Word).text("Line").build(),
        Block::builder().block_type(SdkBlockType::Word).text("one").build(),
        Block::builder().block_type(SdkBlockType::Line).text("Line two").build(),
    ];

    let converted: Vec<_> = blocks.iter().map(to_text_block).collect();

    assert_eq!(ExtractedDocument::from_blocks(&converted).text(), "Line one\nLine two");
}
