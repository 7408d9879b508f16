pub mod llm;
pub mod observability;
pub mod ocr;
pub mod report;
pub mod storage;
