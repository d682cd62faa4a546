//! Input manager: routes documents to the right text extractor

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

#[derive(Default)]
pub struct InputManager {
    docx: DocxExtractor,
    markdown: MarkdownExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract text from an uploaded document. Only PDF and DOCX are accepted.
    pub fn extract_upload(&self, bytes: &[u8], filename: &str) -> Result<String> {
        let file_type = FileType::from_filename(filename);
        if !file_type.is_upload_format() {
            return Err(ResumeRankerError::UnsupportedFormat(format!(
                "Only PDF and DOCX uploads are supported: {}",
                filename
            )));
        }

        self.extract_as(file_type, bytes, filename)
    }

    /// Read a document from disk. Plain text and Markdown are accepted
    /// alongside the upload formats.
    pub async fn load_document(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(FileType::from_extension)
            .ok_or_else(|| {
                ResumeRankerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        let bytes = tokio::fs::read(path).await?;
        self.extract_as(file_type, &bytes, &path.display().to_string())
    }

    fn extract_as(&self, file_type: FileType, bytes: &[u8], source: &str) -> Result<String> {
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", source);
                PdfExtractor.extract(bytes, source)?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", source);
                self.docx.extract(bytes, source)?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", source);
                PlainTextExtractor.extract(bytes, source)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", source);
                self.markdown.extract(bytes, source)?
            }
            FileType::Unknown => {
                return Err(ResumeRankerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    source
                )));
            }
        };

        Ok(text)
    }
}
