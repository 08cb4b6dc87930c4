//! Text Extraction — pluggable, trait-based conversion of uploaded files to plain text.
//!
//! Default: `FileTextExtractor` (plain text natively, PDF through `pdf-extract`).
//! DOCX is reported as unsupported rather than guessed at.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`, swapped at startup.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Formats
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".txt") {
            Some(Self::PlainText)
        } else if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap extraction backends without touching the upload handler.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file_name: &str, bytes: Bytes) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileTextExtractor — default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct FileTextExtractor;

#[async_trait]
impl TextExtractor for FileTextExtractor {
    async fn extract(&self, file_name: &str, bytes: Bytes) -> Result<String, AppError> {
        let format = DocumentFormat::from_file_name(file_name).ok_or_else(|| {
            AppError::UnsupportedFormat(format!(
                "'{file_name}' is not a supported resume format (use .txt or .pdf)"
            ))
        })?;
        debug!(file_name, ?format, size = bytes.len(), "Extracting resume text");

        let text = match format {
            DocumentFormat::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
            DocumentFormat::Pdf => extract_pdf(bytes).await?,
            DocumentFormat::Docx => {
                return Err(AppError::UnsupportedFormat(
                    "DOCX text extraction is not available; upload a PDF or TXT file instead"
                        .to_string(),
                ))
            }
        };

        if text.trim().is_empty() {
            warn!(file_name, "Uploaded file contained no extractable text");
            return Err(AppError::UnprocessableEntity(format!(
                "No text could be extracted from '{file_name}'"
            )));
        }

        Ok(text)
    }
}

/// PDF parsing is CPU-bound, so it runs on the blocking pool.
/// `pdf-extract` panics on some malformed files; a panicked task is treated as unreadable input.
async fn extract_pdf(bytes: Bytes) -> Result<String, AppError> {
    let parsed = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("PDF extraction panicked");
                unreadable_pdf()
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?;

    parsed.map_err(|e| {
        warn!("PDF extraction failed: {e}");
        unreadable_pdf()
    })
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("The PDF could not be read".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_file_name("Resume.PDF"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_file_name("cv.txt"),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(
            DocumentFormat::from_file_name("cv.Docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::from_file_name("cv.rtf"), None);
        assert_eq!(DocumentFormat::from_file_name("pdf"), None);
    }

    #[tokio::test]
    async fn test_plain_text_is_returned_verbatim() {
        let text = FileTextExtractor
            .extract("resume.txt", Bytes::from_static(b"Experience\n- Rust"))
            .await
            .unwrap();
        assert_eq!(text, "Experience\n- Rust");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let text = FileTextExtractor
            .extract("resume.txt", Bytes::from_static(b"Rust \xff engineer"))
            .await
            .unwrap();
        assert!(text.starts_with("Rust "));
        assert!(text.ends_with(" engineer"));
    }

    #[tokio::test]
    async fn test_docx_is_unsupported() {
        let err = FileTextExtractor
            .extract("resume.docx", Bytes::from_static(b"PK\x03\x04"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let err = FileTextExtractor
            .extract("resume.odt", Bytes::from_static(b"data"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_blank_text_file_is_unprocessable() {
        let err = FileTextExtractor
            .extract("resume.txt", Bytes::from_static(b"  \n"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_pdf_text_is_extracted() {
        let pdf = include_bytes!("../../tests/fixtures/resume.pdf");
        let text = FileTextExtractor
            .extract("resume.pdf", Bytes::from_static(pdf))
            .await
            .unwrap();
        for word in ["Experience", "Rust", "Kafka", "Education", "Skills"] {
            assert!(text.contains(word), "missing {word} in {text:?}");
        }
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let err = FileTextExtractor
            .extract("resume.pdf", Bytes::from_static(b"not really a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
