use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use peakagent_core::client::RecommendationSource;
use peakagent_core::fetch::FetchController;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::render;

/// How long a page view waits for an in-flight request before showing the skeleton.
const PAGE_SETTLE_WAIT: Duration = Duration::from_secs(2);

pub struct AppState<S> {
    controller: Arc<FetchController<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

pub fn router<S>(controller: Arc<FetchController<S>>) -> Router
where
    S: RecommendationSource + 'static,
{
    Router::new()
        .route("/", get(index::<S>))
        .route("/retry", post(retry::<S>))
        .route("/healthz", get(healthz))
        .with_state(AppState { controller })
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index<S>(State(state): State<AppState<S>>) -> Html<String>
where
    S: RecommendationSource + 'static,
{
    let fetch_state =
        match tokio::time::timeout(PAGE_SETTLE_WAIT, state.controller.wait_settled()).await {
            Ok(settled) => settled,
            Err(_) => state.controller.state(),
        };
    Html(render::render_page(&fetch_state))
}

async fn retry<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: RecommendationSource + 'static,
{
    if state.controller.retry() {
        tracing::info!("retry requested from page");
    }
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use peakagent_core::client::FetchError;
    use peakagent_core::domain::recommendation::Recommendation;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Fails the first `failures` reads, then serves `body`.
    struct FlakySource {
        failures: usize,
        calls: Arc<AtomicUsize>,
        body: serde_json::Value,
    }

    #[async_trait::async_trait]
    impl RecommendationSource for FlakySource {
        async fn fetch_latest(&self) -> Result<Recommendation, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(FetchError::Http {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            serde_json::from_value(self.body.clone()).map_err(|e| FetchError::Decode {
                detail: e.to_string(),
            })
        }
    }

    fn body() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "symbol": "MSFT",
            "recommendation": "hold",
            "change_percent": -0.021,
            "window_days": 14,
            "trade_date": "2024-06-03",
            "model_name": "gpt-x",
            "rationale": "range bound",
            "created_at": "2024-06-03T08:15:00Z"
        })
    }

    fn setup(failures: usize, body: serde_json::Value) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let controller = Arc::new(FetchController::new(FlakySource {
            failures,
            calls: Arc::clone(&calls),
            body,
        }));
        controller.activate();
        (router(controller), calls)
    }

    async fn get_page(app: &Router) -> String {
        let res = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn post_retry(app: &Router) -> StatusCode {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/retry")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn page_renders_loaded_recommendation() {
        let (app, calls) = setup(0, body());
        let html = get_page(&app).await;
        assert!(html.contains("MSFT"));
        assert!(html.contains("badge-neutral"));
        assert!(html.contains("-2.10%"));
        assert!(html.contains("14 days"));

        get_page(&app).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn error_page_then_retry_recovers() {
        let (app, calls) = setup(1, body());
        let html = get_page(&app).await;
        assert!(html.contains("Error loading data"));
        assert!(html.contains("503"));

        assert_eq!(post_retry(&app).await, StatusCode::SEE_OTHER);
        let html = get_page(&app).await;
        assert!(html.contains("MSFT"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retry_after_success_does_not_refetch() {
        let (app, calls) = setup(0, body());
        get_page(&app).await;
        assert_eq!(post_retry(&app).await, StatusCode::SEE_OTHER);
        get_page(&app).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn decode_failure_shows_error_not_partial_data() {
        let (app, _) = setup(0, serde_json::json!({"unexpected": "shape"}));
        let html = get_page(&app).await;
        assert!(html.contains("Error loading data"));
        assert!(!html.contains("Latest Trading Recommendation"));
    }

    /// Never resolves; models an endpoint slower than the page settle wait.
    struct StalledSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl RecommendationSource for StalledSource {
        async fn fetch_latest(&self) -> Result<Recommendation, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_request_renders_skeleton_with_refresh() {
        let calls = Arc::new(AtomicUsize::new(0));
        let controller = Arc::new(FetchController::new(StalledSource {
            calls: Arc::clone(&calls),
        }));
        controller.activate();
        let app = router(controller);

        let html = get_page(&app).await;
        assert!(html.contains("class=\"skeleton"));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(!html.contains("Error loading data"));
        assert!(!html.contains("Latest Trading Recommendation"));

        assert_eq!(post_retry(&app).await, StatusCode::SEE_OTHER);
        get_page(&app).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let (app, _) = setup(0, body());
        let res = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
