use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::domain::LeadRequest;
use super::features::PageFetcher;
use super::service::LeadScoringService;

/// Router builder exposing the lead scoring endpoint.
pub fn lead_router<F>(service: Arc<LeadScoringService<F>>) -> Router
where
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/score", post(score_handler::<F>))
        .with_state(service)
}

pub(crate) async fn score_handler<F>(
    State(service): State<Arc<LeadScoringService<F>>>,
    request: Result<Json<LeadRequest>, JsonRejection>,
) -> Response
where
    F: PageFetcher + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match service.score(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => unprocessable(error.to_string()),
    }
}

fn unprocessable(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
