//! Summary-table extraction.
//!
//! The page is one big `<table>` of every listed FII. The first table
//! in the document is taken; columns are keyed by their trimmed header
//! text, so column reordering on the site does not break the parse.
//! Columns irrelevant to ranking (Preço do m2, Aluguel por m2,
//! Cap Rate) are simply never mapped.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::entities::fund::RawFundRow;
use crate::domain::error::DomainError;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("valid selector"));
static DATA_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

const TICKER_COLUMN: &str = "Papel";

/// Parse the first table of the summary page into raw rows.
///
/// Fails only when no table exists or the ticker column is absent —
/// both make the whole run meaningless. Any other missing column just
/// leaves that field `None` on every row.
pub fn parse_summary_table(html: &str) -> Result<Vec<RawFundRow>, DomainError> {
    let document = Html::parse_document(html);

    let table = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| DomainError::Parse("No table found in summary page".to_string()))?;

    let headers = header_texts(table);
    if headers.is_empty() {
        return Err(DomainError::Parse(
            "Summary table has no header row".to_string(),
        ));
    }

    let ticker_idx = find_column(&headers, TICKER_COLUMN)
        .ok_or_else(|| DomainError::MissingColumn(TICKER_COLUMN.to_string()))?;

    let segment_idx = find_column(&headers, "Segmento");
    let price_idx = find_column(&headers, "Cotação");
    let ffo_yield_idx = find_column(&headers, "FFO Yield");
    let dy_idx = find_column(&headers, "Dividend Yield");
    let pvp_idx = find_column(&headers, "P/VP");
    let market_value_idx = find_column(&headers, "Valor de Mercado");
    let liquidity_idx = find_column(&headers, "Liquidez");
    let property_count_idx = find_column(&headers, "Qtd de imóveis");
    let vacancy_idx = find_column(&headers, "Vacância Média");

    let mut rows = Vec::new();
    for tr in table.select(&ROW) {
        let cells: Vec<String> = tr.select(&DATA_CELL).map(cell_text).collect();
        if cells.is_empty() {
            // Header row (th-only) or decorative row.
            continue;
        }

        let pick = |idx: Option<usize>| idx.and_then(|i| cells.get(i).cloned());

        let Some(ticker) = cells.get(ticker_idx).cloned() else {
            warn!("Skipping summary row with fewer cells than headers");
            continue;
        };

        rows.push(RawFundRow {
            ticker,
            segment: pick(segment_idx),
            price: pick(price_idx),
            ffo_yield: pick(ffo_yield_idx),
            dividend_yield: pick(dy_idx),
            pvp: pick(pvp_idx),
            market_value: pick(market_value_idx),
            liquidity: pick(liquidity_idx),
            property_count: pick(property_count_idx),
            vacancy: pick(vacancy_idx),
        });
    }

    debug!(rows = rows.len(), "Parsed summary table");
    Ok(rows)
}

fn header_texts(table: ElementRef<'_>) -> Vec<String> {
    let from_th: Vec<String> = table.select(&HEADER_CELL).map(cell_text).collect();
    if !from_th.is_empty() {
        return from_th;
    }
    // Some table renderings use a plain td row as the header.
    table
        .select(&ROW)
        .next()
        .map(|tr| tr.select(&DATA_CELL).map(cell_text).collect())
        .unwrap_or_default()
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.as_str() == name)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
