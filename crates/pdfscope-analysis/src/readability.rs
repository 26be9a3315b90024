//! Flesch Reading Ease approximation

/// Compute the readability score from pre-computed totals, clamped to
/// 0..=100 and rounded to the nearest integer.
///
/// A sentence count of zero is treated as one so text without terminal
/// punctuation still scores.
pub fn flesch_score(word_count: usize, sentence_count: usize, total_syllables: usize) -> u8 {
    let words = word_count.max(1) as f64;
    let sentences = sentence_count.max(1) as f64;

    let avg_sentence_length = words / sentences;
    let avg_syllables_per_word = total_syllables as f64 / words;

    let raw = 206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word);
    raw.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_scores_high() {
        // Short sentences of monosyllables push the formula past 100
        assert_eq!(flesch_score(6, 3, 6), 100);
    }

    #[test]
    fn test_dense_text_clamps_to_zero() {
        // One long sentence of polysyllabic words goes negative before clamping
        assert_eq!(flesch_score(40, 1, 160), 0);
    }

    #[test]
    fn test_zero_sentences_does_not_divide_by_zero() {
        let score = flesch_score(5, 0, 5);
        assert!(score <= 100);
    }

    #[test]
    fn test_rounding() {
        // 206.835 - 1.015*10 - 84.6*1.2 = 95.165
        assert_eq!(flesch_score(10, 1, 12), 95);
    }
}
