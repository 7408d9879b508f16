mod mock_text_detector;
mod textract_detector;

pub use mock_text_detector::MockTextDetector;
pub use textract_detector::{TextractDetector, to_text_block};
