use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::translate::{TranslationOutcome, TranslationRequest};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate))
        .route("/api/translate/languages", get(languages))
}

/// Full application router with middleware and state attached
pub fn build_router(state: AppState) -> Router {
    create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "time": chrono::Utc::now().to_rfc3339(),
        "primaryConfigured": state.resolver.primary_configured()
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> (StatusCode, Json<TranslationOutcome>) {
    let outcome = state.resolver.translate(payload).await;
    let status = if outcome.is_validation_failure() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(outcome))
}

async fn languages(State(state): State<AppState>) -> Json<Value> {
    let offline_pairs: Vec<[String; 2]> = state
        .resolver
        .dictionary()
        .pairs()
        .into_iter()
        .map(|(source, target)| [source, target])
        .collect();

    Json(json!({
        "languages": state.resolver.language_codes().app_codes(),
        "offlinePairs": offline_pairs
    }))
}
