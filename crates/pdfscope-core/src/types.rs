//! Data model shared across the pdfscope crates

use serde::{Deserialize, Serialize};

/// Basic counting statistics over one document's extracted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub character_count: usize,
    /// Rounded to one decimal place
    pub avg_words_per_sentence: f64,
    /// Minutes at 200 words per minute, never below 1
    pub estimated_reading_time: u32,
}

/// Complete analysis of one document.
///
/// Produced once per document text and read-only afterwards; a new document
/// gets a fresh result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub stats: DocumentStats,
    /// Flesch Reading Ease approximation, clamped to 0..=100
    pub readability_score: u8,
    /// At most 5 entries, ordered by descending frequency
    pub key_topics: Vec<String>,
    /// Present only when an enrichment provider succeeded
    pub enrichment: Option<Enrichment>,
}

/// Qualitative assessment merged into an [`AnalysisResult`] when available.
///
/// Field names follow the remote service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    /// 1..=10
    pub quality_score: f64,
    pub tone_and_style: String,
    pub grammar_assessment: String,
    pub structure_analysis: String,
    #[serde(default)]
    pub main_topics: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_analysis: Option<String>,
}
