use crate::client::{FetchError, RecommendationSource};
use crate::config::Settings;
use crate::domain::recommendation::Recommendation;
use anyhow::Context;
use std::time::Duration;

const LATEST_PATH: &str = "/recommendations/latest";

/// Reads the latest recommendation from `{base_url}/recommendations/latest`.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = settings.require_api_base_url()?;
        Self::new(base_url, settings.api_timeout)
    }

    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build recommendation http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim().to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LATEST_PATH)
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationClient {
    async fn fetch_latest(&self) -> Result<Recommendation, FetchError> {
        let res = self
            .http
            .get(self.url())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let text = res.text().await.map_err(FetchError::from_reqwest)?;
        serde_json::from_str::<Recommendation>(&text).map_err(|e| FetchError::Decode {
            detail: e.to_string(),
        })
    }
}
