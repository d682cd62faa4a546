//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    pub fn from_filename(filename: &str) -> Self {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Formats accepted as uploaded documents
    pub fn is_upload_format(&self) -> bool {
        matches!(self, FileType::Pdf | FileType::Docx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_by_filename() {
        assert_eq!(FileType::from_filename("resume.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("cv.final.docx"), FileType::Docx);
        assert_eq!(FileType::from_filename("notes.markdown"), FileType::Markdown);
        assert_eq!(FileType::from_filename("test.txt"), FileType::Text);
        assert_eq!(FileType::from_filename("archive.doc"), FileType::Unknown);
        assert_eq!(FileType::from_filename("README"), FileType::Unknown);
    }

    #[test]
    fn test_upload_formats() {
        assert!(FileType::Pdf.is_upload_format());
        assert!(FileType::Docx.is_upload_format());
        assert!(!FileType::Text.is_upload_format());
    }
}
