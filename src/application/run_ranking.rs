//! Ranking pipeline use case — one full collect/filter/enrich/rank run.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::normalize::normalize;
use crate::application::ranking::{apply_filters, drop_missing_required, rank_and_score};
use crate::domain::entities::fund::{
    ClassificationMap, FundDetail, FundRecord, RankingRun,
};
use crate::domain::error::DomainError;
use crate::domain::ports::detail_source::DetailSource;
use crate::domain::ports::summary_source::SummarySource;
use crate::domain::values::filters::FilterConfig;
use crate::domain::values::weights::RankWeights;

pub struct RankingPipeline {
    summary: Arc<dyn SummarySource>,
    details: Arc<dyn DetailSource>,
    classification: ClassificationMap,
}

impl RankingPipeline {
    pub fn new(
        summary: Arc<dyn SummarySource>,
        details: Arc<dyn DetailSource>,
        classification: ClassificationMap,
    ) -> Self {
        Self {
            summary,
            details,
            classification,
        }
    }

    /// Run the whole pipeline. The only fatal failures are a summary
    /// fetch that yields nothing and a source schema missing the ticker
    /// column; everything else degrades and the run completes.
    ///
    /// With `enrich` off the per-fund detail pages are skipped and every
    /// fund carries a placeholder detail record.
    pub async fn execute(
        &self,
        filters: &FilterConfig,
        weights: &RankWeights,
        enrich: bool,
    ) -> Result<RankingRun, DomainError> {
        filters.warn_if_inverted();
        if weights.is_all_zero() {
            warn!("All rank weights are zero; the final order degenerates to input order");
        }

        let rows = self.summary.fetch_summary().await?;
        let universe_count = rows.len();
        info!(funds = universe_count, source = self.summary.name(), "Fetched summary table");

        let records = normalize(&rows, &self.classification);
        let eligible = drop_missing_required(records);
        let eligible_count = eligible.len();

        let selected = apply_filters(eligible, filters);
        let selected_count = selected.len();
        info!(selected = selected_count, "Applied range filters");
        if selected.is_empty() {
            warn!("No fund passed the filters");
        }

        let pairs = if enrich {
            self.enrich(selected).await
        } else {
            selected
                .into_iter()
                .map(|r| {
                    let url = self.details.detail_url(&r.ticker);
                    (r, FundDetail::unavailable(url))
                })
                .collect()
        };

        let funds = rank_and_score(pairs, weights);

        Ok(RankingRun {
            generated_at: Utc::now(),
            filters: *filters,
            weights: *weights,
            universe_count,
            eligible_count,
            selected_count,
            funds,
        })
    }

    /// Fetch + normalize only: the whole universe, unfiltered and
    /// unranked.
    pub async fn list_universe(&self) -> Result<Vec<FundRecord>, DomainError> {
        let rows = self.summary.fetch_summary().await?;
        Ok(normalize(&rows, &self.classification))
    }

    /// Sequential, delay-paced detail enrichment. One fund's failure is
    /// absorbed by the source; the batch always runs to completion.
    async fn enrich(&self, records: Vec<FundRecord>) -> Vec<(FundRecord, FundDetail)> {
        let total = records.len();
        let mut pairs = Vec::with_capacity(total);
        for (i, record) in records.into_iter().enumerate() {
            if (i + 1) % 10 == 0 || i + 1 == total {
                info!(fund = %record.ticker, current = i + 1, total, "Fetching details");
            }
            let detail = self.details.fetch_detail(&record.ticker).await;
            pairs.push((record, detail));
        }
        pairs
    }
}
