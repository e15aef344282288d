use crate::domain::entities::fund::RawFundRow;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Source of the one-shot summary table listing every traded fund.
///
/// A failure here is the pipeline's fatal case: with no universe there
/// is nothing to rank.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the full summary table, one row per fund.
    async fn fetch_summary(&self) -> Result<Vec<RawFundRow>, DomainError>;
}
