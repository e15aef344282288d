//! Fundamentus adapter: implements both source ports against
//! <https://www.fundamentus.com.br>.

pub mod detail;
pub mod summary;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::entities::fund::{FundDetail, RawFundRow};
use crate::domain::error::DomainError;
use crate::domain::ports::detail_source::DetailSource;
use crate::domain::ports::summary_source::SummarySource;

pub const BASE_URL: &str = "https://www.fundamentus.com.br/";

const SUMMARY_PATH: &str = "fii_resultado.php";
const DETAIL_PATH: &str = "detalhes.php";

/// The site serves a degraded page to obvious bots; a realistic browser
/// user-agent keeps the tables intact.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36";

const SUMMARY_TIMEOUT: Duration = Duration::from_secs(45);
const DETAIL_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed pause before every detail request. This is a politeness
/// rate-limit toward the source site, not a tunable.
const REQUEST_DELAY: Duration = Duration::from_millis(300);

pub struct FundamentusClient {
    client: reqwest::Client,
    base_url: Url,
    request_delay: Duration,
}

impl FundamentusClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different host (used by HTTP-level tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid base URL {base_url}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            base_url,
            request_delay: REQUEST_DELAY,
        })
    }

    /// Override the politeness delay. Tests use this to avoid pacing
    /// against a local mock server.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    async fn get_text(&self, url: &str, timeout: Duration) -> Result<String, DomainError> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("GET {url}: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::Fetch(format!(
                "GET {url}: status {}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| DomainError::Fetch(format!("GET {url}: {e}")))
    }
}

#[async_trait]
impl SummarySource for FundamentusClient {
    fn name(&self) -> &str {
        "fundamentus"
    }

    async fn fetch_summary(&self) -> Result<Vec<RawFundRow>, DomainError> {
        let url = self
            .base_url
            .join(SUMMARY_PATH)
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        debug!(url = %url, "Fetching summary table");

        let body = self.get_text(url.as_str(), SUMMARY_TIMEOUT).await.map_err(|e| {
            error!(error = %e, "Summary fetch failed");
            e
        })?;

        summary::parse_summary_table(&body)
    }
}

#[async_trait]
impl DetailSource for FundamentusClient {
    fn detail_url(&self, ticker: &str) -> String {
        self.base_url
            .join(&format!("{DETAIL_PATH}?papel={ticker}"))
            .map(String::from)
            .unwrap_or_else(|_| format!("{BASE_URL}{DETAIL_PATH}?papel={ticker}"))
    }

    async fn fetch_detail(&self, ticker: &str) -> FundDetail {
        let url = self.detail_url(ticker);

        tokio::time::sleep(self.request_delay).await;

        match self.get_text(&url, DETAIL_TIMEOUT).await {
            Ok(body) => detail::parse_detail_page(&body, &self.base_url, url),
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "Detail fetch failed; continuing with placeholder");
                FundDetail::unavailable(url)
            }
        }
    }
}
