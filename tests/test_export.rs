//! Spreadsheet-export view.

mod common;

use chrono::Utc;
use common::{make_record, placeholder_detail};
use fiirank::application::export::{write_csv, ExportRow};
use fiirank::application::ranking::rank_and_score;
use fiirank::domain::entities::fund::RankingRun;
use fiirank::domain::values::filters::FilterConfig;
use fiirank::domain::values::weights::RankWeights;

fn sample_run() -> RankingRun {
    let records = vec![
        make_record("AAAA11", 0.80, 0.09, 900_000.0),
        make_record("BBBB11", 0.95, 0.12, 500_000.0),
    ];
    let pairs = records
        .into_iter()
        .map(|r| {
            let mut detail = placeholder_detail(&r.ticker);
            detail.report_download_link =
                Some(format!("https://example.test/{}.pdf", r.ticker));
            (r, detail)
        })
        .collect();
    let funds = rank_and_score(pairs, &RankWeights::default());
    RankingRun {
        generated_at: Utc::now(),
        filters: FilterConfig::default(),
        weights: RankWeights::default(),
        universe_count: 2,
        eligible_count: 2,
        selected_count: 2,
        funds,
    }
}

#[test]
fn test_export_drops_navigational_url_and_relabels_ranks() {
    let run = sample_run();
    let mut out = Vec::new();
    write_csv(&run, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    let header = csv.lines().next().unwrap();
    assert!(header.contains("Papel"));
    assert!(header.contains("Rank Final"));
    assert!(header.contains("Rank P/VP"));
    assert!(header.contains("Link Download Relatório"));
    // The detail-page URL is navigational only; it must not be exported.
    assert!(!csv.contains("detalhes.php"));
    // The download link is data and stays.
    assert!(csv.contains("https://example.test/AAAA11.pdf"));
}

#[test]
fn test_export_preserves_ranking_order_and_raw_numbers() {
    let run = sample_run();
    let mut out = Vec::new();
    write_csv(&run, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    // Header plus one line per fund, ranking order preserved.
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(run.funds[0].record.ticker.as_str()));
    assert!(lines[2].starts_with(run.funds[1].record.ticker.as_str()));
    // Raw fractional DY, not a locale-formatted percentage string.
    assert!(csv.contains("0.09"));
}

#[test]
fn test_export_row_carries_score_and_all_ranks() {
    let run = sample_run();
    let row = ExportRow::from(&run.funds[0]);
    assert_eq!(row.weighted_score, run.funds[0].weighted_score);
    assert_eq!(row.rank_pvp, run.funds[0].rank_pvp);
    assert_eq!(row.rank_dy, run.funds[0].rank_dy);
    assert_eq!(row.rank_vacancy, run.funds[0].rank_vacancy);
}

#[test]
fn test_export_of_empty_run_is_empty() {
    let mut run = sample_run();
    run.funds.clear();
    let mut out = Vec::new();
    write_csv(&run, &mut out).unwrap();
    // No rows serialized: not even a header is emitted.
    assert!(out.is_empty());
}
