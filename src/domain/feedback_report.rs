/// Narrative risk assessment produced by the language model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport(String);

impl FeedbackReport {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
