use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::category::{Category, InvalidCategory};
use crate::client::{FetchError, NewsClient};
use crate::state::{FetchPlan, QueryState};

pub struct AppState {
    pub client: NewsClient,
}

/// Query string for `GET /news`. Everything is optional.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_page() -> u32 {
    1
}

fn default_category() -> String {
    Category::General.as_str().to_string()
}

/// Errors surfaced to API callers.
///
/// Validation failures carry the category allow-list; upstream failures are
/// deliberately opaque, with the detail logged server-side only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),
    #[error("Failed to fetch news")]
    Upstream(#[from] FetchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(source) => {
                error!("error fetching news: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the application router. CORS is wide open because the API fronts
/// a browser single-page app served from a different origin.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/news", get(news))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Proxy a news query to the upstream API and relay the body unchanged.
pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category: Category = params.category.parse()?;

    let query = QueryState {
        page: params.page.max(1),
        search: params.search,
        category,
    };
    let plan = FetchPlan::for_state(&query);

    let body = state.client.execute(&plan).await?;
    Ok(Json(body))
}

pub async fn health() -> impl IntoResponse {
    "OK"
}
