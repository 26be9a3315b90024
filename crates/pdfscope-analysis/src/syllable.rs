//! Per-word syllable estimation

use regex::Regex;
use std::sync::LazyLock;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());

/// Estimate the syllable count of a single word.
///
/// Lowercases and strips non-alphabetic characters, treats words of three or
/// fewer letters as one syllable, drops a trailing silent-e pattern and a
/// leading `y`, then counts maximal vowel runs as nuclei. Never returns
/// zero, so a word can't drag the per-word average below one.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);

    let mut nuclei = 0;
    let mut in_run = false;
    for c in stripped.chars() {
        if VOWELS.contains(&c) {
            if !in_run {
                nuclei += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }

    nuclei.max(1)
}
