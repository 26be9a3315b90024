//! Remote analysis service integration for pdfscope
//!
//! This crate provides the HTTP-backed implementation of the
//! EnrichmentProvider trait.

mod client;
mod config;


pub use client::RemoteAnalysisClient;
pub use config::RemoteConfig;

// Re-export core types for convenience
pub use pdfscope_core::{Enrichment, EnrichmentProvider, Error, Result};
