//! Dashboard HTTP Server
//!
//! Serves the dashboard page and dispatches selector changes to the chart
//! callback, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /assets/dashboard.js` - Page script
//!
//! ## API
//! - `GET /api/v1/layout` - Page layout tree
//! - `GET /api/v1/charts?region=..&year=..` - Pie and bar figures
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Dataset summary
//!
//! # Example
//!
//! ```rust,ignore
//! use wildfire_dashboard::api::{serve, ApiConfig, AppState};
//! use wildfire_dashboard::data::{DataSource, DatasetLoader};
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(std::time::Duration::from_secs(30))?;
//!     let dataset = Arc::new(loader.load(&DataSource::default()).await?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(dataset, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::dashboard::layout))
        .route("/charts", get(routes::dashboard::charts));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/assets/dashboard.js", get(routes::dashboard::dashboard_script))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(shared_state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> ApiResult<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Wildfire dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Wildfire dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::HealthResponse;
    use crate::api::error::ErrorResponse;
    use crate::dashboard::MonthOrder;
    use crate::data::fixtures::sample_dataset;
    use crate::data::FireDataset;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with(sample_dataset(), ApiConfig::default())
    }

    fn create_test_app_with(dataset: FireDataset, config: ApiConfig) -> Router {
        let state = AppState::new(Arc::new(dataset), config);
        build_router(state)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.records, 8);
        assert_eq!(health.years, 2);
    }

    #[tokio::test]
    async fn test_health_degraded_when_empty() {
        let app = create_test_app_with(FireDataset::default(), ApiConfig::default());
        let response = send_get(app, "/health").await;

        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "degraded");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = send_get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Australia Wildfire Dashboard"));
        assert!(html.contains("id=\"plot1\""));
        assert!(html.contains("id=\"plot2\""));
    }

    #[tokio::test]
    async fn test_dashboard_script() {
        let response = send_get(create_test_app(), "/assets/dashboard.js").await;
        assert_eq!(response.status(), StatusCode::OK);

        let js = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(js.contains("/api/v1/charts"));
    }

    #[tokio::test]
    async fn test_layout_endpoint() {
        let response = send_get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["title"], "Australia Wildfire Dashboard");
    }

    #[tokio::test]
    async fn test_charts_nsw_2005() {
        let response = send_get(create_test_app(), "/api/v1/charts?region=NSW&year=2005").await;
        assert_eq!(response.status(), StatusCode::OK);

        let figures = body_json(response).await;
        assert_eq!(
            figures["plot1"]["layout"]["title"]["text"],
            "NSW : Monthly Average Estimated Fire Area in 2005"
        );
        assert_eq!(
            figures["plot2"]["layout"]["title"]["text"],
            "NSW : Average Count of Pixels for Presumed Vegetation Fires in 2005"
        );
        assert_eq!(figures["plot1"]["data"][0]["type"], "pie");
        assert_eq!(figures["plot1"]["data"][0]["values"].as_array().unwrap().len(), 3);
        assert_eq!(figures["plot2"]["data"][0]["type"], "bar");
        assert_eq!(figures["plot2"]["data"][0]["y"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_charts_unmatched_selection_is_empty() {
        let response = send_get(create_test_app(), "/api/v1/charts?region=WA&year=9999").await;
        assert_eq!(response.status(), StatusCode::OK);

        let figures = body_json(response).await;
        assert_eq!(figures["plot1"]["data"][0]["values"], json!([]));
        assert_eq!(figures["plot2"]["data"][0]["x"], json!([]));
    }

    #[tokio::test]
    async fn test_charts_without_year() {
        let response = send_get(create_test_app(), "/api/v1/charts?region=NSW").await;
        assert_eq!(response.status(), StatusCode::OK);

        let figures = body_json(response).await;
        assert_eq!(figures["plot1"]["data"][0]["values"], json!([]));
        assert_eq!(
            figures["plot1"]["layout"]["title"]["text"],
            "NSW : Monthly Average Estimated Fire Area in None"
        );
    }

    #[tokio::test]
    async fn test_charts_calendar_order() {
        let config = ApiConfig {
            month_order: MonthOrder::Calendar,
            ..ApiConfig::default()
        };
        let app = create_test_app_with(sample_dataset(), config);
        let response = send_get(app, "/api/v1/charts?region=NSW&year=2005").await;

        let figures = body_json(response).await;
        assert_eq!(
            figures["plot2"]["data"][0]["x"],
            json!(["January", "February", "March"])
        );
    }

    #[tokio::test]
    async fn test_charts_missing_region() {
        let response = send_get(create_test_app(), "/api/v1/charts?year=2005").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("region"));
        assert!(!body.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_charts_malformed_year() {
        let response = send_get(create_test_app(), "/api/v1/charts?region=NSW&year=twenty").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = send_get(create_test_app(), "/api/v1/metrics").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(!body.request_id.is_empty());
    }
}
