//! Text extraction from document bytes

use crate::error::{Result, ResumeRankerError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    /// Extract plain text; `source` names the document in error messages
    fn extract(&self, bytes: &[u8], source: &str) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8], source: &str) -> Result<String> {
        // pdf-extract panics on some malformed documents
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| {
                ResumeRankerError::PdfExtraction(format!("PDF parser crashed on '{}'", source))
            })?;

        extracted.map_err(|e| {
            ResumeRankerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", source, e))
        })
    }
}

/// Reads the WordprocessingML body (`word/document.xml`) of a DOCX archive
pub struct DocxExtractor {
    run_regex: Regex,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        let run_regex = Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:br/>")
            .expect("Invalid DOCX run regex");
        Self { run_regex }
    }

    fn document_text(&self, xml: &str) -> String {
        let mut text = String::new();
        for cap in self.run_regex.captures_iter(xml) {
            match cap.get(1) {
                Some(run) => text.push_str(&decode_entities(run.as_str())),
                None => match &cap[0] {
                    "<w:tab/>" => text.push('\t'),
                    _ => text.push('\n'),
                },
            }
        }

        text.lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8], source: &str) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeRankerError::DocxExtraction(format!("'{}' is not a DOCX archive: {}", source, e))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ResumeRankerError::DocxExtraction(format!("'{}' has no document body: {}", source, e))
            })?
            .read_to_string(&mut xml)?;

        Ok(self.document_text(&xml))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], _source: &str) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub struct MarkdownExtractor {
    tag_regex: Regex,
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self {
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid tag regex"),
        }
    }

    fn html_to_text(&self, html: &str) -> String {
        let text = html.replace("<br>", "\n").replace("</p>", "\n\n");
        let stripped = self.tag_regex.replace_all(&text, "");

        stripped
            .lines()
            .map(|line| decode_entities(line.trim()))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8], _source: &str) -> Result<String> {
        let markdown = String::from_utf8_lossy(bytes);
        let mut html_output = String::new();
        html::push_html(&mut html_output, Parser::new(&markdown));
        Ok(self.html_to_text(&html_output))
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
