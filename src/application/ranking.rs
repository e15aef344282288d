//! Filter & rank engine.
//!
//! Ranks are a whole-collection property: the engine first collects the
//! full filtered set, then computes every ranking over it as a batch.
//! Ties always break by input order ("first" method), which keeps the
//! engine idempotent — identical input yields an identical ordering.

use crate::domain::entities::fund::{FundDetail, FundRecord, RankedFund};
use crate::domain::values::filters::FilterConfig;
use crate::domain::values::weights::RankWeights;
use tracing::info;

/// Remove records missing any field the filters and rankings depend on
/// (ticker, P/VP, liquidity, dividend yield).
pub fn drop_missing_required(records: Vec<FundRecord>) -> Vec<FundRecord> {
    let before = records.len();
    let kept: Vec<FundRecord> = records
        .into_iter()
        .filter(FundRecord::has_required_fields)
        .collect();
    if kept.len() < before {
        info!(
            dropped = before - kept.len(),
            kept = kept.len(),
            "Dropped rows missing required fields"
        );
    }
    kept
}

/// Inclusive range filter on P/VP and DY plus a liquidity floor.
/// An empty result is a legal terminal state, not an error.
pub fn apply_filters(records: Vec<FundRecord>, filters: &FilterConfig) -> Vec<FundRecord> {
    records
        .into_iter()
        .filter(|r| {
            r.pvp
                .map_or(false, |v| v >= filters.min_pvp && v <= filters.max_pvp)
                && r.liquidity.map_or(false, |v| v >= filters.min_liquidity)
                && r.dividend_yield
                    .map_or(false, |v| v >= filters.min_dy && v <= filters.max_dy)
        })
        .collect()
}

/// Rank the surviving set and order it by weighted composite score.
///
/// Each record's score is `Σ weight × rank`; a missing rank value is
/// charged the sentinel `count + 1`, worse than any real rank, rather
/// than poisoning the whole score. The final sort is stable ascending.
pub fn rank_and_score(
    pairs: Vec<(FundRecord, FundDetail)>,
    weights: &RankWeights,
) -> Vec<RankedFund> {
    let n = pairs.len();
    let sentinel = (n + 1) as u64;

    let pvp: Vec<Option<f64>> = pairs.iter().map(|(r, _)| r.pvp).collect();
    let dy: Vec<Option<f64>> = pairs.iter().map(|(r, _)| r.dividend_yield).collect();
    let liquidity: Vec<Option<f64>> = pairs.iter().map(|(r, _)| r.liquidity).collect();
    let vacancy: Vec<Option<f64>> = pairs.iter().map(|(r, _)| r.vacancy).collect();

    let rank_pvp = rank_first(&pvp, Direction::Ascending);
    let rank_dy = rank_first(&dy, Direction::Descending);
    let rank_liquidity = rank_first(&liquidity, Direction::Descending);
    // Missing vacancy ranks at the favorable end on purpose: an unknown
    // vacancy must not penalize a fund by default.
    let rank_vacancy = rank_first_nulls_top(&vacancy, Direction::Ascending);

    let mut ranked: Vec<RankedFund> = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (record, detail))| {
            let weighted_score = [
                (weights.pvp, rank_pvp[i]),
                (weights.dy, rank_dy[i]),
                (weights.liquidity, rank_liquidity[i]),
                (weights.vacancy, Some(rank_vacancy[i])),
            ]
            .into_iter()
            .map(|(w, rank)| u64::from(w) * rank.map_or(sentinel, u64::from))
            .sum();

            RankedFund {
                record,
                detail,
                // Present for every record that passed the required-field
                // drop; a contract breach degrades to the sentinel.
                rank_pvp: rank_pvp[i].unwrap_or(sentinel as u32),
                rank_dy: rank_dy[i].unwrap_or(sentinel as u32),
                rank_liquidity: rank_liquidity[i],
                rank_vacancy: rank_vacancy[i],
                weighted_score,
            }
        })
        .collect();

    ranked.sort_by_key(|f| f.weighted_score);
    ranked
}

#[derive(Clone, Copy)]
enum Direction {
    Ascending,
    Descending,
}

/// "First"-method ranking: 1 is best, ties broken by input order,
/// missing values keep a missing rank.
fn rank_first(values: &[Option<f64>], direction: Direction) -> Vec<Option<u32>> {
    let mut order: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_some()).collect();
    sort_indices(&mut order, values, direction);

    let mut ranks = vec![None; values.len()];
    for (pos, &idx) in order.iter().enumerate() {
        ranks[idx] = Some(pos as u32 + 1);
    }
    ranks
}

/// Like [`rank_first`], but missing values take the best ranks (in
/// input order) and real values follow.
fn rank_first_nulls_top(values: &[Option<f64>], direction: Direction) -> Vec<u32> {
    let missing: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_none()).collect();
    let mut present: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_some()).collect();
    sort_indices(&mut present, values, direction);

    let mut ranks = vec![0u32; values.len()];
    for (pos, &idx) in missing.iter().chain(present.iter()).enumerate() {
        ranks[idx] = pos as u32 + 1;
    }
    ranks
}

fn sort_indices(indices: &mut [usize], values: &[Option<f64>], direction: Direction) {
    indices.sort_by(|&a, &b| {
        let (va, vb) = (values[a].unwrap_or(f64::NAN), values[b].unwrap_or(f64::NAN));
        let ord = va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[f64]) -> Vec<Option<f64>> {
        v.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_rank_first_ascending() {
        let ranks = rank_first(&values(&[0.9, 0.7, 1.0]), Direction::Ascending);
        assert_eq!(ranks, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn test_rank_first_descending() {
        let ranks = rank_first(&values(&[0.09, 0.12, 0.10]), Direction::Descending);
        assert_eq!(ranks, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_rank_first_ties_break_by_input_order() {
        let ranks = rank_first(&values(&[1.0, 1.0, 0.5]), Direction::Ascending);
        assert_eq!(ranks, vec![Some(2), Some(3), Some(1)]);
    }

    #[test]
    fn test_rank_first_keeps_missing_as_none() {
        let ranks = rank_first(&[Some(2.0), None, Some(1.0)], Direction::Ascending);
        assert_eq!(ranks, vec![Some(2), None, Some(1)]);
    }

    #[test]
    fn test_nulls_top_ranks_missing_first() {
        let ranks = rank_first_nulls_top(&[Some(0.10), None, Some(0.02), None], Direction::Ascending);
        // The two missing values take ranks 1 and 2 in input order.
        assert_eq!(ranks, vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_nulls_top_all_present() {
        let ranks = rank_first_nulls_top(&values(&[0.3, 0.1, 0.2]), Direction::Ascending);
        assert_eq!(ranks, vec![3, 1, 2]);
    }
}
