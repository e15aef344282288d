use crate::domain::entities::fund::FundDetail;
use async_trait::async_trait;

/// Source of per-fund detail pages.
///
/// The return type is deliberately infallible: one fund's detail
/// failure must never abort the batch, so implementations degrade to
/// [`FundDetail::unavailable`] internally and log what went wrong.
///
/// [`FundDetail::unavailable`]: crate::domain::entities::fund::FundDetail::unavailable
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Address of the detail page for a ticker (kept on the record so
    /// the presentation layer can link back to it).
    fn detail_url(&self, ticker: &str) -> String;

    /// Fetch and scrape one fund's detail page, best-effort.
    async fn fetch_detail(&self, ticker: &str) -> FundDetail;
}
