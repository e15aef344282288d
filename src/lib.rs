pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use std::path::Path;
use std::sync::Arc;

use crate::application::run_ranking::RankingPipeline;
use crate::domain::entities::fund::{ClassificationMap, FundRecord, RankingRun};
use crate::domain::error::DomainError;
use crate::domain::ports::detail_source::DetailSource;
use crate::domain::ports::summary_source::SummarySource;
use crate::domain::values::filters::FilterConfig;
use crate::domain::values::weights::RankWeights;
use crate::infrastructure::classification::load_classification;
use crate::infrastructure::fundamentus::FundamentusClient;

/// Facade wiring the Fundamentus adapters into the ranking pipeline.
pub struct FiiRank {
    pipeline: RankingPipeline,
}

impl FiiRank {
    /// Production wiring: live Fundamentus client plus the local
    /// classification table (optional; an absent file just means no
    /// type/segment overrides).
    pub fn new(classification_path: &Path) -> Result<Self, DomainError> {
        let client = Arc::new(FundamentusClient::new()?);
        let classification = load_classification(classification_path);
        Ok(Self::with_sources(client.clone(), client, classification))
    }

    /// Explicit wiring, used by tests to substitute fake sources.
    pub fn with_sources(
        summary: Arc<dyn SummarySource>,
        details: Arc<dyn DetailSource>,
        classification: ClassificationMap,
    ) -> Self {
        Self {
            pipeline: RankingPipeline::new(summary, details, classification),
        }
    }

    /// One full collect/filter/enrich/rank run.
    pub async fn rank(
        &self,
        filters: &FilterConfig,
        weights: &RankWeights,
        enrich: bool,
    ) -> Result<RankingRun, DomainError> {
        self.pipeline.execute(filters, weights, enrich).await
    }

    /// The whole normalized universe, unfiltered.
    pub async fn list(&self) -> Result<Vec<FundRecord>, DomainError> {
        self.pipeline.list_universe().await
    }
}
