use crate::handlers;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ReportView, ViolationView};
use crate::server::AppState;
use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use goanalyzer_core::{Token, TokenCensus, TokenKind, config::AnalyzerConfig};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analysis::analyze_code),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        ReportView,
        ViolationView,
        Token,
        TokenKind,
        TokenCensus,
        AnalyzerConfig
    ))
)]
pub struct ApiDoc;

/// Create the main router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index).post(handlers::analyze_form))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1", api_v1_router())
}

/// Create the v1 API router with state
fn api_v1_router() -> Router<AppState> {
    Router::new().route("/analyze", post(handlers::analyze_code))
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
