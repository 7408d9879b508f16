mod pdf_report_renderer;
mod text_wrap;

pub use pdf_report_renderer::{CHARS_PER_LINE, LINES_PER_PAGE, PdfReportRenderer};
pub use text_wrap::wrap_text;
