//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not extract text: {0}")]
    EmptyExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote AI error: {0}")]
    RemoteAi(String),

    #[error("Malformed AI reply: {0}")]
    MalformedReply(String),

    #[error("Remote AI call timed out after {0}s")]
    Timeout(u64),
}

impl ResumeAnalyzerError {
    /// Whether the caller should see this as a rejected upload rather than a
    /// failed analysis.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ResumeAnalyzerError::UnsupportedFormat(_)
                | ResumeAnalyzerError::EmptyExtraction(_)
                | ResumeAnalyzerError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_classification() {
        assert!(ResumeAnalyzerError::UnsupportedFormat("image/png".into()).is_user_facing());
        assert!(ResumeAnalyzerError::EmptyExtraction("cv.pdf".into()).is_user_facing());
        assert!(!ResumeAnalyzerError::Timeout(30).is_user_facing());
        assert!(!ResumeAnalyzerError::MalformedReply("not json".into()).is_user_facing());
    }

    #[test]
    fn test_error_messages() {
        let err = ResumeAnalyzerError::UnsupportedFormat("text/plain".into());
        assert_eq!(err.to_string(), "Unsupported file type: text/plain");

        let err = ResumeAnalyzerError::Timeout(5);
        assert_eq!(err.to_string(), "Remote AI call timed out after 5s");
    }
}
