//! Terminal interface for pdfscope

mod pdf;
mod report;
mod ui;


pub use pdf::{clean_extracted_text, extract_text};
pub use report::{ReportContext, readability_label, render};
pub use ui::display_banner;

// Re-export core types
pub use pdfscope_core::{Error, Result};
