//! Input manager for handling different file types

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Extract plain text from an uploaded resume given its declared MIME type.
///
/// Only PDF and DOCX are accepted; anything else is rejected with
/// [`ResumeAnalyzerError::UnsupportedFormat`]. A document that yields no text
/// fails with [`ResumeAnalyzerError::EmptyExtraction`].
pub async fn parse_resume(path: &Path, mime_type: &str) -> Result<String> {
    let text = match FileType::from_mime(mime_type) {
        FileType::Pdf => {
            info!("Extracting text from PDF: {}", path.display());
            PdfExtractor.extract(path).await?
        }
        FileType::Docx => {
            info!("Extracting text from DOCX: {}", path.display());
            DocxExtractor.extract(path).await?
        }
        _ => return Err(ResumeAnalyzerError::UnsupportedFormat(mime_type.to_string())),
    };

    ensure_text(text, path)
}

fn ensure_text(text: String, path: &Path) -> Result<String> {
    if text.trim().is_empty() {
        Err(ResumeAnalyzerError::EmptyExtraction(path.display().to_string()))
    } else {
        Ok(text)
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract text from any supported file, routing on its extension.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf | FileType::Docx => parse_resume(path, file_type.mime_type()).await?,
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                ensure_text(PlainTextExtractor.extract(path).await?, path)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                ensure_text(MarkdownExtractor.extract(path).await?, path)?
            }
            FileType::Unknown => {
                return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Extract an uploaded resume, validating the file exists and inferring
    /// the MIME type from its extension.
    pub async fn extract_resume(&mut self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        if !file_type.is_resume_document() {
            return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Resumes must be PDF or DOCX: {}",
                path.display()
            )));
        }

        parse_resume(path, file_type.mime_type()).await
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
