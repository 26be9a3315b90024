//! Terminal output helpers

use colored::*;
use crossterm::terminal::size;

/// Box-drawing pieces for a banner of the given total width
fn border_lines(banner_width: usize) -> (String, String, String) {
    let inner = banner_width.saturating_sub(2);
    (
        format!("┌{}┐", "─".repeat(inner)),
        format!("└{}┘", "─".repeat(inner)),
        format!("│{}│", " ".repeat(inner)),
    )
}

/// Display the startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4));

    let (top_border, bottom_border, empty_line) = border_lines(banner_width);

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "pdfscope - PDF Writing Analysis";
    let title_line = format!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(banner_width.saturating_sub(title.len() + 4))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let feature_lines = [
        "📄 Text extraction from PDF documents",
        "📊 Readability scoring and key topics",
        "🔍 Optional AI-powered quality assessment",
        "",
        "v0.1.0",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let pad = banner_width.saturating_sub(line.chars().count() + 5);
            let content = if line.starts_with("v0.1.0") {
                format!("│  {}{}│", line.dimmed(), " ".repeat(pad + 1))
            } else {
                format!("│  {}{}│", line, " ".repeat(pad))
            };
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
}
