//! File type detection

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        match mime.trim().to_lowercase().as_str() {
            PDF_MIME => FileType::Pdf,
            DOCX_MIME => FileType::Docx,
            "text/plain" => FileType::Text,
            "text/markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileType::Pdf => PDF_MIME,
            FileType::Docx => DOCX_MIME,
            FileType::Text => "text/plain",
            FileType::Markdown => "text/markdown",
            FileType::Unknown => "application/octet-stream",
        }
    }

    /// Formats accepted for resume uploads.
    pub fn is_resume_document(&self) -> bool {
        matches!(self, FileType::Pdf | FileType::Docx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_and_mime_agree() {
        for ext in ["pdf", "docx", "txt", "md"] {
            let file_type = FileType::from_extension(ext);
            assert_eq!(FileType::from_mime(file_type.mime_type()), file_type);
        }
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(FileType::from_extension("png"), FileType::Unknown);
        assert_eq!(FileType::from_mime("image/png"), FileType::Unknown);
        assert!(!FileType::Text.is_resume_document());
        assert!(FileType::Docx.is_resume_document());
    }
}
