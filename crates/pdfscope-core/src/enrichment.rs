//! Enrichment provider trait

use async_trait::async_trait;

use super::Result;
use super::types::Enrichment;

/// Trait for enrichment providers (remote analysis service, builtin
/// heuristics, mocks in tests).
///
/// A provider receives the full document text and returns a qualitative
/// assessment. Providers are best-effort: the analysis engine treats any
/// `Err` as "enrichment unavailable" and falls back to locally computed
/// fields, so implementations should not retry internally.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Produce an enrichment payload for the given document text
    async fn enrich(&self, text: &str) -> Result<Enrichment>;

    /// Short provider name for status output
    fn name(&self) -> &str;
}
