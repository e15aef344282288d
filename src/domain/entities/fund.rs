use crate::domain::values::filters::FilterConfig;
use crate::domain::values::fund_type::FundType;
use crate::domain::values::weights::RankWeights;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel used where the source page gives no report date.
pub const NO_REPORT_DATE: &str = "N/A";

/// One row of the Fundamentus summary table, exactly as scraped.
///
/// Everything except the ticker is kept as the raw locale-formatted
/// cell text; coercion to numbers is the normalizer's job. A `None`
/// means the column was absent from the source table, not that the
/// cell was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFundRow {
    pub ticker: String,
    pub segment: Option<String>,
    pub price: Option<String>,
    pub ffo_yield: Option<String>,
    pub dividend_yield: Option<String>,
    pub pvp: Option<String>,
    pub market_value: Option<String>,
    pub liquidity: Option<String>,
    pub property_count: Option<String>,
    pub vacancy: Option<String>,
}

/// External classification for one ticker: an optional type override
/// and an optional segment override. Absent fields fall back to the
/// summary-provided data during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub fund_type: Option<FundType>,
    pub original_segment: Option<String>,
}

/// Ticker-keyed classification table, read-only after load.
pub type ClassificationMap = HashMap<String, ClassificationEntry>;

/// Summary row with every numeric field coerced to a typed value.
///
/// Percentage fields are fractional (0.1234, not 12.34). A `None`
/// records a coercion failure or an absent source column; raw strings
/// never survive past the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub ticker: String,
    pub segment: String,
    pub fund_type: FundType,
    pub price: Option<f64>,
    pub ffo_yield: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub pvp: Option<f64>,
    pub market_value: Option<f64>,
    pub liquidity: Option<f64>,
    pub property_count: Option<i64>,
    pub vacancy: Option<f64>,
}

impl FundRecord {
    /// True when the fields every downstream filter and ranking step
    /// depends on are all present.
    pub fn has_required_fields(&self) -> bool {
        !self.ticker.is_empty()
            && self.pvp.is_some()
            && self.liquidity.is_some()
            && self.dividend_yield.is_some()
    }
}

/// Best-effort extraction from one fund's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundDetail {
    /// Literal `DD/MM/YYYY` string from the page, or [`NO_REPORT_DATE`].
    pub last_report_date: String,
    pub report_download_link: Option<String>,
    pub documents_link: Option<String>,
    pub osc_day: Option<f64>,
    pub osc_month: Option<f64>,
    pub osc_12m: Option<f64>,
    /// The detail page itself; navigational, dropped from exports.
    pub detail_url: String,
}

impl FundDetail {
    /// Placeholder returned when the detail fetch fails outright.
    pub fn unavailable(detail_url: String) -> Self {
        Self {
            last_report_date: NO_REPORT_DATE.to_string(),
            report_download_link: None,
            documents_link: None,
            osc_day: None,
            osc_month: None,
            osc_12m: None,
            detail_url,
        }
    }
}

/// A fund that survived filtering, enriched and ranked against the
/// whole surviving set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFund {
    pub record: FundRecord,
    pub detail: FundDetail,
    pub rank_pvp: u32,
    pub rank_dy: u32,
    /// Only absent when the liquidity column was missing entirely.
    pub rank_liquidity: Option<u32>,
    pub rank_vacancy: u32,
    pub weighted_score: u64,
}

/// Envelope for one complete pipeline run, ordered best-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRun {
    pub generated_at: DateTime<Utc>,
    pub filters: FilterConfig,
    pub weights: RankWeights,
    /// Rows in the raw summary table.
    pub universe_count: usize,
    /// Rows surviving the required-field drop.
    pub eligible_count: usize,
    /// Rows surviving the range filters (== funds.len()).
    pub selected_count: usize,
    pub funds: Vec<RankedFund>,
}
