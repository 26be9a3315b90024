//! Core types and traits for pdfscope

pub mod enrichment;
pub mod error;
pub mod types;

pub use enrichment::EnrichmentProvider;
pub use error::{Error, Result};
pub use types::{AnalysisResult, DocumentStats, Enrichment};
