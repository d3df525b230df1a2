//! Text Extraction — converts an uploaded document (PDF, DOCX, or TXT)
//! into a single text string.
//!
//! Extraction failures are explicit `ExtractError` values so the batch
//! loop can record a reason per file instead of silently treating an
//! unreadable resume as empty. One bad file never aborts the batch —
//! that policy lives in the pipeline, not here.

use std::io::{Cursor, Read};

use bytes::Bytes;
use quick_xml::events::Event;
use thiserror::Error;

/// One uploaded resume file. Transient — exists only for the duration of
/// a single screening run and is owned by the invoking request.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("failed to read DOCX: {0}")]
    Docx(String),

    #[error("failed to read TXT: not valid UTF-8")]
    Utf8,
}

/// Supported document formats, determined by file-name suffix
/// (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let suffix = file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match suffix.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Extracts the raw text of a document according to its file-name suffix.
pub fn extract(document: &Document) -> Result<String, ExtractError> {
    match DocumentFormat::from_file_name(&document.file_name)? {
        DocumentFormat::Pdf => extract_pdf(&document.bytes),
        DocumentFormat::Docx => extract_docx(&document.bytes),
        DocumentFormat::Txt => extract_txt(&document.bytes),
    }
}

/// Every page's text concatenated in order. No separator is guaranteed
/// between pages — adjacent pages' text may run together.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// A .docx is a zip package; the body lives in `word/document.xml`.
/// Concatenates the text of every `<w:t>` run, one line per `<w:p>`
/// paragraph, in document order.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| ExtractError::Docx(e.to_string()))?
        {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                current.push_str(&t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::Utf8)
}
