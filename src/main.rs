use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;

// Import from our modular crates
use pdfscope_analysis::{BuiltinEnrichment, analyze_with_enrichment};
use pdfscope_cli::{ReportContext, display_banner, extract_text, render};
use pdfscope_core::EnrichmentProvider;
use pdfscope_remote::{RemoteAnalysisClient, RemoteConfig};

const DEMO_FILE_NAME: &str = "demo_document.pdf";

const DEMO_TEXT: &str = "\
# Sample Document

This is a sample document for testing the PDF analyzer application.

## Introduction

The PDF analyzer is designed to extract text from PDF documents and provide comprehensive writing analysis. This includes word count, readability scores, and key topic identification.

## Features

The application provides the following features:
- Text extraction from PDF files
- Word count and sentence analysis
- Readability scoring using the Flesch Reading Ease formula
- Key topic identification through frequency analysis
- Export functionality for analysis reports

## Conclusion

This sample document demonstrates the capabilities of the PDF analyzer. The text extraction should work properly, and the analysis should provide meaningful insights about the document structure and content quality.

Thank you for testing the PDF analyzer application!";

#[derive(Parser)]
#[command(name = "pdfscope")]
#[command(about = "PDF text analyzer with readability and topic insights", long_about = None)]
struct Cli {
    /// PDF file to analyze
    file: Option<PathBuf>,

    /// Analyze a bundled sample document instead of a file
    #[arg(long)]
    demo: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enrichment source for the qualitative assessment
    #[arg(long, value_enum, default_value_t = EnrichMode::Auto)]
    enrich: EnrichMode,

    /// Suppress the banner and progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Where the qualitative assessment comes from
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EnrichMode {
    /// Remote service when configured, otherwise local analysis only
    Auto,
    /// Remote service, failing if not configured
    Remote,
    /// In-process heuristics
    Builtin,
    /// Local statistics only
    Off,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if !cli.quiet {
        display_banner();
    }

    let (file_name, text) = load_document(&cli)?;

    if text.trim().is_empty() {
        bail!("no extractable text found in {file_name}");
    }

    let provider = select_provider(cli.enrich, cli.quiet)?;

    if !cli.quiet {
        println!(
            "{} Analyzing {} ({} characters)...",
            "🔍".blue(),
            file_name,
            text.chars().count()
        );
    }

    let result = analyze_with_enrichment(&text, provider.as_deref()).await?;

    if !cli.quiet {
        match (&result.enrichment, provider.as_ref()) {
            (Some(_), Some(p)) => {
                println!("{} Enrichment merged from {} provider", "✅".green(), p.name())
            }
            (None, Some(_)) => println!(
                "{} Enrichment unavailable, showing local analysis only",
                "⚠️".yellow()
            ),
            _ => {}
        }
    }

    let ctx = ReportContext {
        file_name,
        generated: chrono::Local::now(),
    };
    let report = render(&result, &text, &ctx);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report)?;
            if !cli.quiet {
                println!("{} Report written to {}", "💾".green(), path.display());
            }
        }
        None => println!("{report}"),
    }

    Ok(())
}

fn load_document(cli: &Cli) -> Result<(String, String)> {
    if cli.demo {
        return Ok((DEMO_FILE_NAME.to_string(), DEMO_TEXT.to_string()));
    }

    let Some(path) = cli.file.as_ref() else {
        bail!("provide a PDF file to analyze, or pass --demo");
    };

    if !cli.quiet {
        println!("{} Extracting text from {}...", "📄".blue(), path.display());
    }

    let text = extract_text(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((file_name, text))
}

fn select_provider(mode: EnrichMode, quiet: bool) -> Result<Option<Box<dyn EnrichmentProvider>>> {
    match mode {
        EnrichMode::Off => Ok(None),
        EnrichMode::Builtin => Ok(Some(Box::new(BuiltinEnrichment::new()))),
        EnrichMode::Remote => {
            let config = RemoteConfig::from_env().map_err(|e| {
                anyhow::anyhow!("remote enrichment requested but not configured: {e}")
            })?;
            Ok(Some(Box::new(RemoteAnalysisClient::new(config)?)))
        }
        EnrichMode::Auto => match RemoteConfig::from_env() {
            Ok(config) => Ok(Some(Box::new(RemoteAnalysisClient::new(config)?))),
            Err(_) => {
                if !quiet {
                    println!(
                        "{}",
                        "ℹ️  No analysis service configured, skipping enrichment".dimmed()
                    );
                }
                Ok(None)
            }
        },
    }
}
