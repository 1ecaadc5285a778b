//! Resume text extraction: PDF bytes in, lowercase plain text out.
//!
//! The matcher assumes lowercase input, so normalization happens here at the
//! boundary rather than inside the core.

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF and normalizes it for matching.
/// An unreadable or textless PDF is an unprocessable upload, not a crash.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Unable to read resume text: {e}")))?;

    let text = normalize(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Unable to read resume text: PDF contains no text".to_string(),
        ));
    }
    Ok(text)
}

/// Runs [`extract_text`] on the blocking pool. PDF parsing is CPU-bound, so
/// it must not run inline on an async runtime worker.
pub async fn extract_text_off_thread(bytes: Vec<u8>) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?
}

/// Lowercases and collapses all whitespace runs (including line breaks from
/// PDF layout) to single spaces.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses_whitespace() {
        let raw = "Experienced  Python\nDeveloper\t with   SQL";
        assert_eq!(normalize(raw), "experienced python developer with sql");
    }

    #[test]
    fn test_normalize_empty_input_is_empty() {
        assert_eq!(normalize("  \n\t "), "");
    }

    #[test]
    fn test_garbage_bytes_are_unprocessable() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_off_thread_extraction_propagates_errors() {
        let err = extract_text_off_thread(b"definitely not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
