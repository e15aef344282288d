//! Raw summary rows → typed fund records.
//!
//! Every coercion is independently tolerant: an unparseable cell
//! becomes `None` and flows on, to be excluded later by the engine's
//! required-field drop if it was load-bearing.

use crate::domain::entities::fund::{ClassificationMap, FundRecord, RawFundRow};
use crate::domain::values::br_number::{parse_br_integer, parse_br_number, parse_br_percent};
use crate::domain::values::fund_type::FundType;
use tracing::{debug, warn};

/// Fallback segment when neither the classification table nor the
/// summary source provides one.
pub const UNCLASSIFIED_SEGMENT: &str = "Não Classificado";

/// Convert raw rows into normalized records, merging in the external
/// classification. Rows with an empty ticker are dropped here — the
/// ticker is the key everything downstream joins on.
pub fn normalize(rows: &[RawFundRow], classification: &ClassificationMap) -> Vec<FundRecord> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let ticker = row.ticker.trim().to_string();
        if ticker.is_empty() {
            warn!("Dropping summary row with empty ticker");
            continue;
        }

        let entry = classification.get(&ticker);

        let segment = resolve_segment(
            entry.and_then(|e| e.original_segment.as_deref()),
            row.segment.as_deref(),
        );
        let fund_type = entry
            .and_then(|e| e.fund_type)
            .unwrap_or(FundType::Undefined);

        records.push(FundRecord {
            ticker,
            segment,
            fund_type,
            price: coerce(row.price.as_deref(), parse_br_number),
            ffo_yield: coerce(row.ffo_yield.as_deref(), parse_br_percent),
            dividend_yield: coerce(row.dividend_yield.as_deref(), parse_br_percent),
            pvp: coerce(row.pvp.as_deref(), parse_br_number),
            market_value: coerce(row.market_value.as_deref(), parse_br_number),
            liquidity: coerce(row.liquidity.as_deref(), parse_br_number),
            property_count: coerce(row.property_count.as_deref(), parse_br_integer),
            vacancy: coerce(row.vacancy.as_deref(), parse_br_percent),
        });
    }
    debug!(count = records.len(), "Normalized summary rows");
    records
}

/// Classification override wins when present and non-empty, then the
/// raw source label, then the unclassified fallback.
fn resolve_segment(override_segment: Option<&str>, source_segment: Option<&str>) -> String {
    [override_segment, source_segment]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(UNCLASSIFIED_SEGMENT)
        .to_string()
}

fn coerce<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    raw.and_then(|s| parse(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fund::ClassificationEntry;

    fn raw_row(ticker: &str) -> RawFundRow {
        RawFundRow {
            ticker: ticker.to_string(),
            segment: Some("Lajes Corporativas".to_string()),
            price: Some("R$ 98,50".to_string()),
            ffo_yield: Some("9,10%".to_string()),
            dividend_yield: Some("8,50%".to_string()),
            pvp: Some("0,95".to_string()),
            market_value: Some("1.500.000.000".to_string()),
            liquidity: Some("850.000".to_string()),
            property_count: Some("12".to_string()),
            vacancy: Some("5,30%".to_string()),
        }
    }

    #[test]
    fn test_numeric_coercion_and_percentage_scaling() {
        let records = normalize(&[raw_row("HGRE11")], &ClassificationMap::new());
        let r = &records[0];
        assert_eq!(r.price, Some(98.50));
        assert_eq!(r.dividend_yield, Some(0.085));
        assert_eq!(r.ffo_yield, Some(0.091));
        assert_eq!(r.vacancy, Some(0.053));
        assert_eq!(r.pvp, Some(0.95));
        assert_eq!(r.liquidity, Some(850_000.0));
        assert_eq!(r.property_count, Some(12));
    }

    #[test]
    fn test_unparseable_becomes_none_not_zero() {
        let mut row = raw_row("XPML11");
        row.pvp = Some("n/d".to_string());
        row.property_count = Some("3,5".to_string());
        let records = normalize(&[row], &ClassificationMap::new());
        assert_eq!(records[0].pvp, None);
        assert_eq!(records[0].property_count, None);
    }

    #[test]
    fn test_absent_column_is_none() {
        let mut row = raw_row("KNRI11");
        row.vacancy = None;
        let records = normalize(&[row], &ClassificationMap::new());
        assert_eq!(records[0].vacancy, None);
    }

    #[test]
    fn test_segment_prefers_classification_override() {
        let mut classification = ClassificationMap::new();
        classification.insert(
            "HGRE11".to_string(),
            ClassificationEntry {
                fund_type: Some(FundType::Brick),
                original_segment: Some("Escritórios".to_string()),
            },
        );
        let records = normalize(&[raw_row("HGRE11")], &classification);
        assert_eq!(records[0].segment, "Escritórios");
        assert_eq!(records[0].fund_type, FundType::Brick);
    }

    #[test]
    fn test_segment_falls_back_to_source_then_unclassified() {
        let mut classification = ClassificationMap::new();
        classification.insert(
            "HGRE11".to_string(),
            ClassificationEntry {
                fund_type: None,
                original_segment: Some("  ".to_string()),
            },
        );
        let records = normalize(&[raw_row("HGRE11")], &classification);
        assert_eq!(records[0].segment, "Lajes Corporativas");
        assert_eq!(records[0].fund_type, FundType::Undefined);

        let mut bare = raw_row("ABCD11");
        bare.segment = None;
        let records = normalize(&[bare], &ClassificationMap::new());
        assert_eq!(records[0].segment, UNCLASSIFIED_SEGMENT);
    }

    #[test]
    fn test_empty_ticker_row_dropped() {
        let records = normalize(&[raw_row("  ")], &ClassificationMap::new());
        assert!(records.is_empty());
    }
}
