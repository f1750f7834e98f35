//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /assets/dashboard.js - Page script
//! - GET /api/v1/layout - Layout tree as JSON
//! - GET /api/v1/charts - Both figures for a region/year selection

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{region_year_display, DashboardFigures, Layout};

static DASHBOARD_JS: &str = include_str!("../../../assets/dashboard.js");

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.layout.render_html())
}

/// GET /assets/dashboard.js
pub async fn dashboard_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/charts?region=NSW&year=2005
///
/// Both figures are returned in one body so the page replaces them together.
pub async fn charts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> ApiResult<Json<DashboardFigures>> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;

    let figures = region_year_display(
        &state.dataset,
        &query.region,
        query.year,
        state.config.month_order,
    );

    Ok(Json(figures))
}
