//! Plain-text report rendering

use std::fmt::Write;

use chrono::{DateTime, Local};
use pdfscope_core::AnalysisResult;

/// Metadata rendered into the report header, passed in so rendering stays a
/// pure function
pub struct ReportContext {
    pub file_name: String,
    pub generated: DateTime<Local>,
}

/// Categorical label for a readability score
pub fn readability_label(score: u8) -> &'static str {
    match score {
        90..=100 => "Very Easy",
        80..=89 => "Easy",
        70..=79 => "Fairly Easy",
        60..=69 => "Standard",
        50..=59 => "Fairly Difficult",
        30..=49 => "Difficult",
        _ => "Very Difficult",
    }
}

/// Render an analysis result and the document text as a plain-text report
pub fn render(result: &AnalysisResult, text: &str, ctx: &ReportContext) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "PDF Analysis Report");
    let _ = writeln!(out, "Generated: {}", ctx.generated.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "File: {}", ctx.file_name);
    out.push('\n');

    let stats = &result.stats;
    let _ = writeln!(out, "=== DOCUMENT STATISTICS ===");
    let _ = writeln!(out, "Word Count: {}", stats.word_count);
    let _ = writeln!(out, "Sentence Count: {}", stats.sentence_count);
    let _ = writeln!(out, "Paragraph Count: {}", stats.paragraph_count);
    let _ = writeln!(out, "Character Count: {}", stats.character_count);
    let _ = writeln!(out, "Average Words per Sentence: {:.1}", stats.avg_words_per_sentence);
    let _ = writeln!(out, "Estimated Reading Time: {} minutes", stats.estimated_reading_time);
    out.push('\n');

    let _ = writeln!(out, "=== READABILITY ANALYSIS ===");
    let _ = writeln!(out, "Readability Score: {}/100", result.readability_score);
    let _ = writeln!(out, "{}", readability_label(result.readability_score));
    out.push('\n');

    let _ = writeln!(out, "=== KEY TOPICS ===");
    if result.key_topics.is_empty() {
        let _ = writeln!(out, "No key topics identified");
    } else {
        for (i, topic) in result.key_topics.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, topic);
        }
    }
    out.push('\n');

    match &result.enrichment {
        Some(enrichment) => {
            let _ = writeln!(out, "=== AI-POWERED ANALYSIS ===");
            let _ = writeln!(out, "Writing Quality Score: {}/10", enrichment.quality_score);
            let _ = writeln!(out, "Tone & Style: {}", enrichment.tone_and_style);
            let _ = writeln!(out, "Grammar Assessment: {}", enrichment.grammar_assessment);
            let _ = writeln!(out, "Structure Analysis: {}", enrichment.structure_analysis);
            out.push('\n');

            write_list(&mut out, "Strengths:", &enrichment.strengths, "None identified");
            write_list(&mut out, "Areas for Improvement:", &enrichment.improvements, "None identified");
            write_list(&mut out, "Suggestions:", &enrichment.suggestions, "None provided");

            if let Some(full) = &enrichment.full_analysis {
                let _ = writeln!(out, "Detailed Analysis:");
                let _ = writeln!(out, "{}", full);
                out.push('\n');
            }
        }
        None => {
            let _ = writeln!(out, "=== AI ANALYSIS ===");
            let _ = writeln!(out, "AI analysis not available for this document.");
            out.push('\n');
        }
    }

    let _ = writeln!(out, "=== EXTRACTED TEXT ===");
    out.push_str(text);
    out.push('\n');

    out
}

fn write_list(out: &mut String, heading: &str, items: &[String], empty_note: &str) {
    let _ = writeln!(out, "{heading}");
    if items.is_empty() {
        let _ = writeln!(out, "{empty_note}");
    } else {
        for (i, item) in items.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, item);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pdfscope_core::{DocumentStats, Enrichment};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            stats: DocumentStats {
                word_count: 10,
                sentence_count: 2,
                paragraph_count: 1,
                character_count: 44,
                avg_words_per_sentence: 5.0,
                estimated_reading_time: 1,
            },
            readability_score: 100,
            key_topics: vec!["today".to_string()],
            enrichment: None,
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            file_name: "sample.pdf".to_string(),
            generated: Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_labels_cover_all_thresholds() {
        assert_eq!(readability_label(100), "Very Easy");
        assert_eq!(readability_label(90), "Very Easy");
        assert_eq!(readability_label(85), "Easy");
        assert_eq!(readability_label(72), "Fairly Easy");
        assert_eq!(readability_label(60), "Standard");
        assert_eq!(readability_label(55), "Fairly Difficult");
        assert_eq!(readability_label(30), "Difficult");
        assert_eq!(readability_label(29), "Very Difficult");
        assert_eq!(readability_label(0), "Very Difficult");
    }

    #[test]
    fn test_report_without_enrichment() {
        let report = render(&sample_result(), "The cat sat.", &context());

        assert!(report.contains("=== DOCUMENT STATISTICS ==="));
        assert!(report.contains("Word Count: 10"));
        assert!(report.contains("Readability Score: 100/100"));
        assert!(report.contains("Very Easy"));
        assert!(report.contains("1. today"));
        assert!(report.contains("AI analysis not available"));
        assert!(report.ends_with("=== EXTRACTED TEXT ===\nThe cat sat.\n"));
    }

    #[test]
    fn test_report_with_enrichment() {
        let mut result = sample_result();
        result.enrichment = Some(Enrichment {
            quality_score: 8.0,
            tone_and_style: "Formal and professional".to_string(),
            grammar_assessment: "Fine".to_string(),
            structure_analysis: "Single paragraph structure".to_string(),
            main_topics: vec![],
            strengths: vec!["Rich vocabulary usage".to_string()],
            improvements: vec![],
            suggestions: vec!["Proofread for any typos or errors".to_string()],
            full_analysis: Some("Reads well overall.".to_string()),
        });

        let report = render(&result, "text", &context());

        assert!(report.contains("=== AI-POWERED ANALYSIS ==="));
        assert!(report.contains("Writing Quality Score: 8/10"));
        assert!(report.contains("Strengths:\n1. Rich vocabulary usage"));
        assert!(report.contains("Areas for Improvement:\nNone identified"));
        assert!(report.contains("Detailed Analysis:\nReads well overall."));
        assert!(!report.contains("AI analysis not available"));
    }

    #[test]
    fn test_statistics_round_trip() {
        let result = sample_result();
        let report = render(&result, "irrelevant", &context());

        let field = |label: &str| -> String {
            report
                .lines()
                .find_map(|line| line.strip_prefix(label))
                .unwrap_or_else(|| panic!("missing line: {label}"))
                .to_string()
        };

        assert_eq!(field("Word Count: ").parse::<usize>().unwrap(), result.stats.word_count);
        assert_eq!(field("Sentence Count: ").parse::<usize>().unwrap(), result.stats.sentence_count);
        assert_eq!(field("Paragraph Count: ").parse::<usize>().unwrap(), result.stats.paragraph_count);
        assert_eq!(field("Character Count: ").parse::<usize>().unwrap(), result.stats.character_count);
        assert_eq!(
            field("Average Words per Sentence: ").parse::<f64>().unwrap(),
            result.stats.avg_words_per_sentence
        );
        let reading = field("Estimated Reading Time: ");
        let minutes = reading.strip_suffix(" minutes").unwrap();
        assert_eq!(minutes.parse::<u32>().unwrap(), result.stats.estimated_reading_time);
        let score = field("Readability Score: ");
        let score = score.strip_suffix("/100").unwrap();
        assert_eq!(score.parse::<u8>().unwrap(), result.readability_score);
    }

    #[test]
    fn test_header_uses_context() {
        let report = render(&sample_result(), "x", &context());
        assert!(report.starts_with("PDF Analysis Report\nGenerated: 2026-03-14 09:26:53\nFile: sample.pdf\n"));
    }
}
