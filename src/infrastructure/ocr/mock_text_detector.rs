use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{TextDetectionError, TextDetector};
use crate::domain::TextBlock;

/// Returns a canned detection result regardless of input and counts invocations.
pub struct MockTextDetector {
    result: Result<Vec<TextBlock>, TextDetectionError>,
    calls: AtomicUsize,
}

impl MockTextDetector {
    pub fn new(blocks: Vec<TextBlock>) -> Self {
        Self {
            result: Ok(blocks),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: TextDetectionError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextDetector for MockTextDetector {
    async fn detect_document_text(&self, _data: &[u8]) -> Result<Vec<TextBlock>, TextDetectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
