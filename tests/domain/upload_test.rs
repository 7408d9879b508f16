use bytes::Bytes;

use safework::domain::{FeedbackReport, FileExtension, UploadRequest};

#[test]
fn given_supported_filename_when_creating_upload_then_sanitizes_and_keeps_extension() {
    let upload = UploadRequest::new("site photos/Report 1.JPG", Bytes::from_static(b"img")).unwrap();

    assert_eq!(upload.filename, "site_photos_Report_1.JPG");
    assert_eq!(upload.extension, FileExtension::Jpg);
    assert_eq!(upload.size_bytes(), 3);
}

#[test]
fn given_unsupported_filename_when_creating_upload_then_fails() {
    let result = UploadRequest::new("notes.txt", Bytes::from_static(b"hello"));

    assert!(result.is_err());
}

#[test]
fn given_filename_that_sanitizes_to_nothing_when_creating_upload_then_fails() {
    assert!(UploadRequest::validate_filename("../").is_err());
}

#[test]
fn given_non_ascii_stem_when_creating_upload_then_falls_back_to_generated_name() {
    let upload = UploadRequest::new("报告.pdf", Bytes::from_static(b"%PDF")).unwrap();

    assert_eq!(upload.filename, "upload.pdf");
    assert_eq!(upload.extension, FileExtension::Pdf);
}

#[test]
fn given_mixed_script_stem_when_validating_then_keeps_ascii_part() {
    let (filename, extension) = UploadRequest::validate_filename("guardrail_报告.JPEG").unwrap();

    assert_eq!(extension, FileExtension::Jpeg);
    assert_eq!(filename, "guardrail_.JPEG");
}

#[test]
fn given_padded_text_when_creating_feedback_then_trims() {
    let report = FeedbackReport::new("\n  1. Risks: none  \n");

    assert_eq!(report.as_str(), "1. Risks: none");
}
