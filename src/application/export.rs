//! Spreadsheet-export view of a ranking run.
//!
//! The export keeps raw numeric values (locale formatting belongs to
//! the presentation layer), drops the purely navigational detail-page
//! URL, and relabels the rank columns for human readers.

use std::io::Write;

use serde::Serialize;

use crate::domain::entities::fund::{RankedFund, RankingRun};
use crate::domain::error::DomainError;

#[derive(Debug, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Papel")]
    pub ticker: String,
    #[serde(rename = "Segmento")]
    pub segment: String,
    #[serde(rename = "Tipo")]
    pub fund_type: String,
    #[serde(rename = "Cotação")]
    pub price: Option<f64>,
    #[serde(rename = "FFO Yield")]
    pub ffo_yield: Option<f64>,
    #[serde(rename = "Dividend Yield")]
    pub dividend_yield: Option<f64>,
    #[serde(rename = "P/VP")]
    pub pvp: Option<f64>,
    #[serde(rename = "Valor de Mercado")]
    pub market_value: Option<f64>,
    #[serde(rename = "Liquidez")]
    pub liquidity: Option<f64>,
    #[serde(rename = "Qtd de imóveis")]
    pub property_count: Option<i64>,
    #[serde(rename = "Vacância Média")]
    pub vacancy: Option<f64>,
    #[serde(rename = "Osc. Dia")]
    pub osc_day: Option<f64>,
    #[serde(rename = "Osc. Mês")]
    pub osc_month: Option<f64>,
    #[serde(rename = "Osc. 12 Meses")]
    pub osc_12m: Option<f64>,
    #[serde(rename = "Data Último Relatório")]
    pub last_report_date: String,
    #[serde(rename = "Link Download Relatório")]
    pub report_download_link: Option<String>,
    #[serde(rename = "Rank Final")]
    pub weighted_score: u64,
    #[serde(rename = "Rank P/VP")]
    pub rank_pvp: u32,
    #[serde(rename = "Rank DY")]
    pub rank_dy: u32,
    #[serde(rename = "Rank Liquidez")]
    pub rank_liquidity: Option<u32>,
    #[serde(rename = "Rank Vacância")]
    pub rank_vacancy: u32,
}

impl From<&RankedFund> for ExportRow {
    fn from(f: &RankedFund) -> Self {
        Self {
            ticker: f.record.ticker.clone(),
            segment: f.record.segment.clone(),
            fund_type: f.record.fund_type.to_string(),
            price: f.record.price,
            ffo_yield: f.record.ffo_yield,
            dividend_yield: f.record.dividend_yield,
            pvp: f.record.pvp,
            market_value: f.record.market_value,
            liquidity: f.record.liquidity,
            property_count: f.record.property_count,
            vacancy: f.record.vacancy,
            osc_day: f.detail.osc_day,
            osc_month: f.detail.osc_month,
            osc_12m: f.detail.osc_12m,
            last_report_date: f.detail.last_report_date.clone(),
            report_download_link: f.detail.report_download_link.clone(),
            weighted_score: f.weighted_score,
            rank_pvp: f.rank_pvp,
            rank_dy: f.rank_dy,
            rank_liquidity: f.rank_liquidity,
            rank_vacancy: f.rank_vacancy,
        }
    }
}

/// Write a run's funds as CSV, ranking order preserved.
pub fn write_csv<W: Write>(run: &RankingRun, writer: W) -> Result<(), DomainError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for fund in &run.funds {
        csv_writer
            .serialize(ExportRow::from(fund))
            .map_err(|e| DomainError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| DomainError::Export(e.to_string()))?;
    Ok(())
}
