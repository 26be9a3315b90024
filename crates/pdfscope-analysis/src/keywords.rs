//! Frequency-based key topic extraction

use std::collections::HashMap;

/// Tokens this short carry little topical signal
const MIN_TOPIC_LEN: usize = 5;

/// Extract up to 5 key topics from text.
///
/// Lowercases, replaces non-word characters with spaces, drops tokens
/// shorter than five characters, then ranks by descending frequency.
/// Equal-frequency tokens keep their first-occurrence order, so the output
/// is deterministic for identical input.
pub fn extract_key_topics(text: &str) -> Vec<String> {
    token_frequencies(text)
        .into_iter()
        .take(5)
        .map(|(token, _)| token)
        .collect()
}

/// Distinct tokens ranked by descending frequency with first-seen tie-break
pub(crate) fn token_frequencies(text: &str) -> Vec<(String, usize)> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in cleaned.split_whitespace().enumerate() {
        if token.chars().count() < MIN_TOPIC_LEN {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });

    ranked
        .into_iter()
        .map(|(token, (count, _))| (token.to_string(), count))
        .collect()
}
