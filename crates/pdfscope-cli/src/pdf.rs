//! PDF text extraction

use std::path::Path;

use pdfscope_core::{Error, Result};

/// Extract the full text of a PDF file
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        Error::Extraction(format!(
            "failed to extract text from {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(clean_extracted_text(&text))
}

/// Clean up extracted PDF text.
///
/// Strips null and BOM artifacts, trims each line, and collapses blank-line
/// runs to a single blank line so paragraph boundaries survive without the
/// extractor's layout noise.
pub fn clean_extracted_text(text: &str) -> String {
    let mut out = String::new();
    let mut pending_break = false;

    for line in text.lines() {
        let line = line.replace(['\u{0}', '\u{FEFF}'], "");
        let line = line.trim();

        if line.is_empty() {
            pending_break = !out.is_empty();
            continue;
        }

        if pending_break {
            out.push_str("\n\n");
            pending_break = false;
        } else if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }

    out
}
