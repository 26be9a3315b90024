//! Text analysis engine for pdfscope
//!
//! Takes the extracted text of one document and computes counting
//! statistics, a Flesch Reading Ease approximation, and frequency-based key
//! topics. An optional [`EnrichmentProvider`] can layer a qualitative
//! assessment on top; any provider failure degrades to the local-only
//! result.

mod engine;
mod heuristics;
mod keywords;
mod readability;
mod syllable;
mod tokenize;


pub use engine::{analyze, analyze_with_enrichment, apply_enrichment};
pub use heuristics::BuiltinEnrichment;
pub use keywords::extract_key_topics;
pub use readability::flesch_score;
pub use syllable::count_syllables;
pub use tokenize::{paragraphs, sentences, words};

// Re-export core types
pub use pdfscope_core::{AnalysisResult, DocumentStats, Enrichment, EnrichmentProvider, Error, Result};
