//! Builtin heuristic enrichment
//!
//! The same qualitative assessment the remote analysis service computes,
//! available in-process so the tool works offline.

use std::collections::HashSet;

use async_trait::async_trait;
use pdfscope_core::{Enrichment, EnrichmentProvider, Result};

use crate::keywords::token_frequencies;
use crate::tokenize::{paragraphs, sentences, words};

const FORMAL_INDICATORS: &[&str] = &["therefore", "furthermore", "consequently", "moreover", "however"];
const INFORMAL_INDICATORS: &[&str] = &["really", "pretty", "quite", "very", "just"];

/// High-frequency function words excluded from topic extraction
const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "were",
    "said", "each", "which", "their", "time", "would", "there", "could",
    "other", "more", "very", "what", "know", "just", "first", "into", "over",
    "think", "also", "your", "work", "life", "only", "still", "should",
    "after", "being", "made", "before", "here", "through", "when", "where",
    "much", "some", "these", "many", "then", "them", "well",
];

/// Enrichment provider backed by local heuristics instead of a remote call
#[derive(Debug, Clone, Default)]
pub struct BuiltinEnrichment;

impl BuiltinEnrichment {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full qualitative assessment for a document
    pub fn assess(&self, text: &str) -> Enrichment {
        let words = words(text);
        let sentences = sentences(text);
        let paragraph_count = paragraphs(text).len();

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f64 / sentences.len() as f64
        };

        let vocabulary_diversity = if words.is_empty() {
            0.0
        } else {
            let distinct: HashSet<&str> = words.iter().copied().collect();
            distinct.len() as f64 / words.len() as f64
        };

        let (strengths, improvements) =
            feedback(avg_sentence_length, vocabulary_diversity, paragraph_count);

        Enrichment {
            quality_score: quality_score(avg_sentence_length, vocabulary_diversity),
            tone_and_style: tone_and_style(text).to_string(),
            grammar_assessment: grammar_assessment(&sentences),
            structure_analysis: structure_analysis(text, paragraph_count),
            main_topics: filtered_topics(text),
            strengths,
            improvements,
            suggestions: suggestions(
                avg_sentence_length,
                vocabulary_diversity,
                paragraph_count,
                words.len(),
            ),
            full_analysis: None,
        }
    }
}

#[async_trait]
impl EnrichmentProvider for BuiltinEnrichment {
    async fn enrich(&self, text: &str) -> Result<Enrichment> {
        Ok(self.assess(text))
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

/// Quality score on a 1..=10 scale: average with adjustments for sentence
/// length band and vocabulary diversity
fn quality_score(avg_sentence_length: f64, vocabulary_diversity: f64) -> f64 {
    let mut score: f64 = 7.0;

    if (15.0..=20.0).contains(&avg_sentence_length) {
        score += 1.0;
    } else if avg_sentence_length < 10.0 || avg_sentence_length > 25.0 {
        score -= 1.0;
    }

    if vocabulary_diversity > 0.7 {
        score += 1.0;
    } else if vocabulary_diversity < 0.5 {
        score -= 1.0;
    }

    score.clamp(1.0, 10.0)
}

fn tone_and_style(text: &str) -> &'static str {
    let lowered = text.to_lowercase();

    let formal = FORMAL_INDICATORS.iter().filter(|w| lowered.contains(**w)).count();
    let informal = INFORMAL_INDICATORS.iter().filter(|w| lowered.contains(**w)).count();

    if formal > informal {
        "Formal and professional"
    } else if informal > formal {
        "Conversational and informal"
    } else {
        "Balanced and neutral"
    }
}

fn grammar_assessment(sentences: &[&str]) -> String {
    let mut issues = Vec::new();

    let short = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() < 4)
        .count();
    if short as f64 > sentences.len() as f64 * 0.3 {
        issues.push("Some sentences may be too short");
    }

    if sentences.iter().any(|s| s.split_whitespace().count() > 30) {
        issues.push("Some sentences may be too long");
    }

    if issues.is_empty() {
        "Grammar appears to be generally correct with good sentence structure".to_string()
    } else {
        format!("Consider reviewing: {}", issues.join("; "))
    }
}

fn structure_analysis(text: &str, paragraph_count: usize) -> String {
    let mut notes = Vec::new();

    let headings = text
        .lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .count();
    if headings > 0 {
        notes.push(format!("Document has {headings} heading(s)"));
    }

    if paragraph_count > 1 {
        notes.push(format!("Well-organized with {paragraph_count} paragraph(s)"));
    } else {
        notes.push("Single paragraph structure".to_string());
    }

    notes.join("; ")
}

fn feedback(
    avg_sentence_length: f64,
    vocabulary_diversity: f64,
    paragraph_count: usize,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if (15.0..=20.0).contains(&avg_sentence_length) {
        strengths.push("Good sentence length variation".to_string());
    }
    if vocabulary_diversity > 0.7 {
        strengths.push("Rich vocabulary usage".to_string());
    }
    if paragraph_count > 1 {
        strengths.push("Clear paragraph organization".to_string());
    }
    if strengths.is_empty() {
        strengths = vec![
            "Clear communication".to_string(),
            "Readable content".to_string(),
        ];
    }

    if avg_sentence_length < 10.0 {
        improvements.push("Consider combining some short sentences".to_string());
    } else if avg_sentence_length > 25.0 {
        improvements.push("Consider breaking down long sentences".to_string());
    }
    if vocabulary_diversity < 0.5 {
        improvements.push("Try using more varied vocabulary".to_string());
    }
    if improvements.is_empty() {
        improvements = vec![
            "Consider adding more specific examples".to_string(),
            "Review for clarity and conciseness".to_string(),
        ];
    }

    strengths.truncate(3);
    improvements.truncate(3);
    (strengths, improvements)
}

fn suggestions(
    avg_sentence_length: f64,
    vocabulary_diversity: f64,
    paragraph_count: usize,
    word_count: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if avg_sentence_length > 20.0 {
        suggestions.push("Break down complex sentences for better readability".to_string());
    }
    if vocabulary_diversity < 0.6 {
        suggestions.push("Use synonyms to avoid word repetition".to_string());
    }
    if paragraph_count == 1 && word_count > 100 {
        suggestions.push("Consider breaking content into multiple paragraphs".to_string());
    }

    if suggestions.is_empty() {
        suggestions = vec![
            "Proofread for any typos or errors".to_string(),
            "Consider your target audience when reviewing".to_string(),
            "Read aloud to check flow and rhythm".to_string(),
        ];
    }

    suggestions.truncate(3);
    suggestions
}

/// Topic extraction with stop-word filtering on top of the shared frequency
/// ranking
fn filtered_topics(text: &str) -> Vec<String> {
    token_frequencies(text)
        .into_iter()
        .filter(|(token, _)| !STOP_WORDS.contains(&token.as_str()))
        .take(5)
        .map(|(token, _)| token)
        .collect()
}
