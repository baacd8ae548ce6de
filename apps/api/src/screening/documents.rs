//! Text extraction from uploaded resume files.
//!
//! PDFs go through `pdf-extract` on the blocking pool; images are handed to the
//! `tesseract` CLI. Neither path claims accuracy, only "some text or an error".

use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
}

impl DocumentKind {
    /// Classifies an upload by file extension (pdf, png, jpg, jpeg).
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        if filename.is_empty() {
            return Err(AppError::Validation(
                "Empty filename. Please select a valid file.".to_string(),
            ));
        }
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "png" | "jpg" | "jpeg" => Ok(DocumentKind::Image),
            _ => Err(AppError::Validation(
                "Unsupported file type. Allowed: PDF, PNG, JPG, JPEG.".to_string(),
            )),
        }
    }
}

/// Reads text out of uploaded documents.
#[derive(Debug, Clone)]
pub struct DocumentReader {
    tesseract_cmd: String,
}

impl DocumentReader {
    pub fn new(tesseract_cmd: impl Into<String>) -> Self {
        Self {
            tesseract_cmd: tesseract_cmd.into(),
        }
    }

    /// Returns the document text. Whitespace-only output is an error.
    pub async fn read_text(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError> {
        let text = match kind {
            DocumentKind::Pdf => read_pdf(bytes).await?,
            DocumentKind::Image => self.ocr_image(bytes).await?,
        };
        if text.trim().is_empty() {
            return Err(AppError::Document(
                "Could not extract text from this file. Please upload a clearer PDF or a higher-resolution image."
                    .to_string(),
            ));
        }
        debug!("Extracted {} characters from {:?}", text.len(), kind);
        Ok(text)
    }

    async fn ocr_image(&self, bytes: Bytes) -> Result<String, AppError> {
        let ocr_failed = || {
            AppError::Document(
                "Could not run OCR on the image. Ensure Tesseract OCR is installed.".to_string(),
            )
        };

        let file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".img")
            .tempfile()
            .map_err(|e| AppError::Internal(e.into()))?;
        tokio::fs::write(file.path(), &bytes)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;

        let output = Command::new(&self.tesseract_cmd)
            .arg(file.path())
            .arg("stdout")
            .output()
            .await
            .map_err(|e| {
                warn!("Failed to launch '{}': {e}", self.tesseract_cmd);
                ocr_failed()
            })?;

        if !output.status.success() {
            warn!(
                "OCR exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(ocr_failed());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

async fn read_pdf(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Document(format!("PDF parsing aborted: {e}")))?
        .map_err(|e| {
            warn!("PDF text extraction failed: {e}");
            AppError::Document("Failed to read the PDF file.".to_string())
        })
}
