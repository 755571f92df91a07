//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;
        self.extract_from_bytes(&bytes).map_err(|e| match e {
            ResumeAnalyzerError::DocxExtraction(msg) => {
                ResumeAnalyzerError::DocxExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl DocxExtractor {
    /// Read `word/document.xml` out of the archive and flatten it to text.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("not a DOCX archive: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("missing document body: {}", e)))?
            .read_to_string(&mut xml)?;

        self.xml_to_text(&xml)
    }

    /// Visible text only: `w:t` runs, with paragraphs, breaks and tabs mapped.
    /// Deleted revisions (`w:delText`) and field codes are skipped.
    fn xml_to_text(&self, xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event().map_err(docx_error)? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                    _ => {}
                },
                Event::Text(e) if in_run_text => text.push_str(&e.unescape().map_err(docx_error)?),
                Event::CData(e) if in_run_text => text.push_str(&String::from_utf8_lossy(&e)),
                Event::Eof => break,
                _ => {}
            }
        }

        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        Ok(lines.join("\n").trim().to_string())
    }
}

fn docx_error(e: quick_xml::Error) -> ResumeAnalyzerError {
    ResumeAnalyzerError::DocxExtraction(format!("malformed document body: {}", e))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ");

        let clean_text = TAG_RE.replace_all(&text, "");

        let lines: Vec<String> = decode_entities(&clean_text)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

/// `&amp;` goes last so already-escaped entities are not decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Minimal DOCX archive holding only `word/document.xml`.
#[cfg(test)]
pub(crate) fn build_docx(document_xml: &str) -> Vec<u8> {
    use std::io::Write;

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    buffer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t>Rust &amp; Go</w:t><w:tab/><w:t>2019</w:t></w:r></w:p></w:body></w:document>"#;
        let text = DocxExtractor.extract_from_bytes(&build_docx(xml)).unwrap();

        assert_eq!(text, "Jane Doe\nRust & Go\t2019");
    }

    #[test]
    fn test_docx_skips_deleted_revisions() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Rust developer</w:t></w:r><w:del w:id="1"><w:r><w:delText>Senior Director of Kubernetes</w:delText></w:r></w:del></w:p></w:body></w:document>"#;
        let text = DocxExtractor.extract_from_bytes(&build_docx(xml)).unwrap();

        assert_eq!(text, "Rust developer");
    }

    #[test]
    fn test_docx_numeric_character_references() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t xml:space="preserve">Jane&#8217;s CV &#x2013; 2024</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Line</w:t><w:br/><w:t>Break</w:t></w:r></w:p></w:body></w:document>"#;
        let text = DocxExtractor.extract_from_bytes(&build_docx(xml)).unwrap();

        assert_eq!(text, "Jane\u{2019}s CV \u{2013} 2024\n\nLine\nBreak");
    }

    #[test]
    fn test_docx_rejects_malformed_xml() {
        let result = DocxExtractor.extract_from_bytes(&build_docx("<w:document><w:t>unclosed</w:p>"));
        assert!(matches!(result, Err(ResumeAnalyzerError::DocxExtraction(_))));
    }

    #[test]
    fn test_docx_rejects_non_archive() {
        let result = DocxExtractor.extract_from_bytes(b"plain bytes, not a zip");
        assert!(matches!(result, Err(ResumeAnalyzerError::DocxExtraction(_))));
    }

    #[test]
    fn test_markdown_html_to_text() {
        let text = MarkdownExtractor.html_to_text("<h2>Skills</h2>\n<ul>\n<li>Rust &amp; Go</li>\n</ul>\n");
        assert_eq!(text, "Skills\nRust & Go");
    }

    #[test]
    fn test_entity_decoding_order() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
