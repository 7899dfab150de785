use crate::domain::recommendation::Recommendation;

pub mod error;
pub mod http;

pub use error::FetchError;
pub use http::HttpRecommendationClient;

/// Source of the latest recommendation. One call is one read.
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Recommendation, FetchError>;
}
