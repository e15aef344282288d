//! Shared test helpers: record builders and fake sources.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use fiirank::domain::entities::fund::{FundDetail, FundRecord, RawFundRow};
use fiirank::domain::error::DomainError;
use fiirank::domain::ports::detail_source::DetailSource;
use fiirank::domain::ports::summary_source::SummarySource;
use fiirank::domain::values::fund_type::FundType;

pub fn make_record(ticker: &str, pvp: f64, dy: f64, liquidity: f64) -> FundRecord {
    FundRecord {
        ticker: ticker.to_string(),
        segment: "Logística".to_string(),
        fund_type: FundType::Undefined,
        price: Some(100.0),
        ffo_yield: Some(0.09),
        dividend_yield: Some(dy),
        pvp: Some(pvp),
        market_value: Some(1_000_000_000.0),
        liquidity: Some(liquidity),
        property_count: Some(10),
        vacancy: Some(0.05),
    }
}

pub fn make_raw_row(ticker: &str, pvp: &str, dy: &str, liquidity: &str) -> RawFundRow {
    RawFundRow {
        ticker: ticker.to_string(),
        segment: Some("Logística".to_string()),
        price: Some("R$ 100,00".to_string()),
        ffo_yield: Some("9,00%".to_string()),
        dividend_yield: Some(dy.to_string()),
        pvp: Some(pvp.to_string()),
        market_value: Some("1.000.000.000".to_string()),
        liquidity: Some(liquidity.to_string()),
        property_count: Some("10".to_string()),
        vacancy: Some("5,00%".to_string()),
    }
}

pub fn placeholder_detail(ticker: &str) -> FundDetail {
    FundDetail::unavailable(format!("https://example.test/detalhes.php?papel={ticker}"))
}

/// Summary source serving a fixed set of rows.
pub struct StaticSummary {
    pub rows: Vec<RawFundRow>,
}

#[async_trait]
impl SummarySource for StaticSummary {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_summary(&self) -> Result<Vec<RawFundRow>, DomainError> {
        Ok(self.rows.clone())
    }
}

/// Summary source that always fails, for the fatal path.
pub struct FailingSummary;

#[async_trait]
impl SummarySource for FailingSummary {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_summary(&self) -> Result<Vec<RawFundRow>, DomainError> {
        Err(DomainError::Fetch("connection refused".to_string()))
    }
}

/// Detail source serving canned records and counting calls.
pub struct StaticDetails {
    pub by_ticker: HashMap<String, FundDetail>,
    pub calls: Arc<AtomicUsize>,
}

impl StaticDetails {
    pub fn empty() -> Self {
        Self {
            by_ticker: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_details(by_ticker: HashMap<String, FundDetail>) -> Self {
        Self {
            by_ticker,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DetailSource for StaticDetails {
    fn detail_url(&self, ticker: &str) -> String {
        format!("https://example.test/detalhes.php?papel={ticker}")
    }

    async fn fetch_detail(&self, ticker: &str) -> FundDetail {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.by_ticker
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| placeholder_detail(ticker))
    }
}
