//! Analysis orchestration: local statistics plus optional enrichment

use pdfscope_core::{AnalysisResult, DocumentStats, Enrichment, EnrichmentProvider, Error, Result};

use crate::keywords::extract_key_topics;
use crate::readability::flesch_score;
use crate::syllable::count_syllables;
use crate::tokenize::{paragraphs, sentences, words};

/// Reading speed used for the estimated reading time
const WORDS_PER_MINUTE: usize = 200;

/// Analyze document text locally.
///
/// Pure function of the input: no shared state survives between calls, so
/// sequential documents are fully independent. Fails fast with
/// [`Error::InvalidInput`] on empty or whitespace-only text; any other
/// non-empty input produces a result.
pub fn analyze(text: &str) -> Result<AnalysisResult> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput(
            "document text is empty; nothing to analyze".to_string(),
        ));
    }

    let words = words(text);
    let sentences = sentences(text);
    let paragraphs = paragraphs(text);

    let word_count = words.len();
    let sentence_count = sentences.len();
    // Guard against text with no terminal punctuation
    let effective_sentences = sentence_count.max(1);

    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let readability_score = flesch_score(word_count, sentence_count, total_syllables);

    let avg_words_per_sentence =
        (word_count as f64 / effective_sentences as f64 * 10.0).round() / 10.0;
    let estimated_reading_time = word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u32;

    Ok(AnalysisResult {
        stats: DocumentStats {
            word_count,
            sentence_count,
            paragraph_count: paragraphs.len(),
            character_count: text.chars().count(),
            avg_words_per_sentence,
            estimated_reading_time,
        },
        readability_score,
        key_topics: extract_key_topics(text),
        enrichment: None,
    })
}

/// Analyze document text, merging in the provider's assessment when one is
/// configured and succeeds.
///
/// The provider is best-effort: any failure leaves the locally computed
/// result untouched with `enrichment` absent. Abandoning the returned
/// future discards the in-flight enrichment call along with it; nothing is
/// applied to ambient state.
pub async fn analyze_with_enrichment(
    text: &str,
    provider: Option<&dyn EnrichmentProvider>,
) -> Result<AnalysisResult> {
    let mut result = analyze(text)?;

    if let Some(provider) = provider {
        if let Ok(enrichment) = provider.enrich(text).await {
            apply_enrichment(&mut result, enrichment);
        }
    }

    Ok(result)
}

/// Merge an enrichment payload into a locally computed result.
///
/// The provider's topic list replaces the local one when non-empty, still
/// capped at five entries.
pub fn apply_enrichment(result: &mut AnalysisResult, enrichment: Enrichment) {
    if !enrichment.main_topics.is_empty() {
        result.key_topics = enrichment.main_topics.iter().take(5).cloned().collect();
    }
    result.enrichment = Some(enrichment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(analyze(""), Err(Error::InvalidInput(_))));
        assert!(matches!(analyze("   \n\t  "), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_sample_sentence_statistics() {
        let result = analyze("The cat sat. The cat ran fast and far today.").unwrap();

        assert_eq!(result.stats.word_count, 10);
        assert_eq!(result.stats.sentence_count, 2);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.avg_words_per_sentence, 5.0);
        assert_eq!(result.stats.estimated_reading_time, 1);
        assert!(result.readability_score <= 100);
        assert_eq!(result.key_topics, vec!["today"]);
        assert!(result.enrichment.is_none());
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        // Without a `.!?` delimiter the whole text is a single fragment
        let result = analyze("three words here").unwrap();

        assert_eq!(result.stats.word_count, 3);
        assert_eq!(result.stats.sentence_count, 1);
        assert_eq!(result.stats.avg_words_per_sentence, 3.0);
        assert!(result.readability_score <= 100);
    }

    #[test]
    fn test_punctuation_only_text_hits_sentence_guard() {
        // Every fragment filters out, so the sentence count really is zero
        let result = analyze("...").unwrap();

        assert_eq!(result.stats.word_count, 1);
        assert_eq!(result.stats.sentence_count, 0);
        // The zero count still yields a finite average
        assert_eq!(result.stats.avg_words_per_sentence, 1.0);
        assert!(result.readability_score <= 100);
    }

    #[test]
    fn test_invariants_on_arbitrary_text() {
        let texts = [
            "x",
            "Hello, world!",
            "One.\n\nTwo.\n\nThree paragraphs in total, honestly.",
            "!!!?!. leading punctuation",
        ];

        for text in texts {
            let result = analyze(text).unwrap();
            assert!(result.stats.word_count >= 1, "{text:?}");
            assert!(result.readability_score <= 100, "{text:?}");
            assert!(result.key_topics.len() <= 5, "{text:?}");
            assert!(result.stats.estimated_reading_time >= 1, "{text:?}");
        }
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let long_text = "word ".repeat(201) + ".";
        let result = analyze(&long_text).unwrap();
        assert_eq!(result.stats.estimated_reading_time, 2);
    }

    #[test]
    fn test_apply_enrichment_topic_precedence() {
        let mut result = analyze("alpha alpha beta1 beta1 words.").unwrap();
        let enrichment = Enrichment {
            quality_score: 8.0,
            tone_and_style: "Balanced and neutral".to_string(),
            grammar_assessment: "Fine".to_string(),
            structure_analysis: "Single paragraph structure".to_string(),
            main_topics: vec!["gamma".to_string()],
            strengths: vec![],
            improvements: vec![],
            suggestions: vec![],
            full_analysis: None,
        };

        apply_enrichment(&mut result, enrichment);

        assert_eq!(result.key_topics, vec!["gamma"]);
        assert!(result.enrichment.is_some());
    }

    #[test]
    fn test_apply_enrichment_keeps_local_topics_when_empty() {
        let mut result = analyze("topic topic filler filler other.").unwrap();
        let local_topics = result.key_topics.clone();
        let enrichment = Enrichment {
            quality_score: 6.0,
            tone_and_style: String::new(),
            grammar_assessment: String::new(),
            structure_analysis: String::new(),
            main_topics: vec![],
            strengths: vec![],
            improvements: vec![],
            suggestions: vec![],
            full_analysis: None,
        };

        apply_enrichment(&mut result, enrichment);

        assert_eq!(result.key_topics, local_topics);
        assert!(result.enrichment.is_some());
    }
}
