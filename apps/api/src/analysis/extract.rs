//! Resume text extraction.
//!
//! PDFs go through `pdf-extract`; plain text and markdown are decoded as
//! UTF-8. Word documents are recognized only to be rejected with a clear
//! message.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// The uploaded `resume` form field.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    WordProcessor,
    Unknown,
}

impl DocumentKind {
    /// Content sniffing wins over the declared type, which wins over the extension.
    pub fn detect(upload: &ResumeUpload) -> Self {
        if upload.bytes.starts_with(PDF_MAGIC) {
            return DocumentKind::Pdf;
        }

        let content_type = upload
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());
        match content_type.as_deref() {
            Some("application/pdf") => return DocumentKind::Pdf,
            Some("text/plain") | Some("text/markdown") => return DocumentKind::PlainText,
            Some("application/msword")
            | Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document") => {
                return DocumentKind::WordProcessor
            }
            _ => {}
        }

        let extension = std::path::Path::new(&upload.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("txt") | Some("md") | Some("markdown") => DocumentKind::PlainText,
            Some("doc") | Some("docx") => DocumentKind::WordProcessor,
            _ => DocumentKind::Unknown,
        }
    }
}

/// Extracts, normalizes and truncates the resume text.
pub async fn extract_text(upload: &ResumeUpload, max_chars: usize) -> Result<String, AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::DocumentExtraction(format!(
            "'{}' is empty",
            upload.file_name
        )));
    }

    let kind = DocumentKind::detect(upload);
    debug!(
        "Extracting text from '{}' ({} bytes) as {:?}",
        upload.file_name,
        upload.bytes.len(),
        kind
    );

    let raw = match kind {
        DocumentKind::Pdf => extract_pdf(upload.bytes.clone(), &upload.file_name).await?,
        DocumentKind::PlainText => String::from_utf8(upload.bytes.to_vec()).map_err(|_| {
            AppError::DocumentExtraction(format!("'{}' is not valid UTF-8 text", upload.file_name))
        })?,
        DocumentKind::WordProcessor => {
            return Err(AppError::UnsupportedDocument(
                "Word documents are not supported yet; please upload a PDF".to_string(),
            ))
        }
        DocumentKind::Unknown => {
            return Err(AppError::UnsupportedDocument(format!(
                "'{}' is not a PDF or plain-text file",
                upload.file_name
            )))
        }
    };

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(AppError::DocumentExtraction(format!(
            "No readable text found in '{}'",
            upload.file_name
        )));
    }

    Ok(truncate_chars(text, max_chars))
}

/// `pdf-extract` is CPU-bound and panics on some malformed files, so it runs
/// on the blocking pool where a panic surfaces as a `JoinError`.
async fn extract_pdf(bytes: Bytes, file_name: &str) -> Result<String, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed for '{file_name}': {e}");
            Err(AppError::DocumentExtraction(format!(
                "Could not parse '{file_name}' as a PDF"
            )))
        }
        Err(e) => {
            warn!("PDF extraction aborted for '{file_name}': {e}");
            Err(AppError::DocumentExtraction(format!(
                "Could not parse '{file_name}' as a PDF"
            )))
        }
    }
}

/// Trims line ends and collapses runs of blank lines to one.
fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0;
    for line in raw.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        blank_run = 0;
        out.push_str(line);
    }
    out
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            debug!("Truncating resume text to {max_chars} chars");
            text[..byte_idx].to_string()
        }
        None => text,
    }
}
