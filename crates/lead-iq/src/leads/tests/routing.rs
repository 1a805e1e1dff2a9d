use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::leads::router::score_handler;
use crate::leads::{lead_router, LeadRequest};

fn post_score(body: serde_json::Value) -> Request<Body> {
    Request::post("/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn score_handler_returns_unprocessable_for_blank_url() {
    let service = build_service(joes_pizza_fetcher());

    let response = score_handler::<StubFetcher>(
        State(service),
        Ok(axum::Json(LeadRequest::new("Joe's Pizza", "   "))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "website_url is required");
}

#[tokio::test]
async fn score_route_omits_debug_keys_by_default() {
    let router = lead_router(build_service(joes_pizza_fetcher()));

    let response = router
        .oneshot(post_score(json!({
            "business_name": "Joe's Pizza",
            "website_url": "joespizza.example",
            "category": "restaurant",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 69);
    assert_eq!(payload["confidence"], 0.7);
    assert!(payload["reasons"].is_array());
    assert!(payload.get("recommended_offer").is_some());
    assert!(payload.get("outreach_opener").is_some());
    assert!(payload.get("next_step").is_some());
    assert!(payload.get("debug").is_none());
    assert!(payload.get("meta").is_none());
}

#[tokio::test]
async fn score_route_includes_debug_and_meta_on_request() {
    let router = lead_router(build_service(joes_pizza_fetcher()));

    let response = router
        .oneshot(post_score(json!({
            "business_name": "Joe's Pizza",
            "website_url": "https://joespizza.example",
            "town": "Ames",
            "debug": true,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["debug"]["category"], "default");
    assert_eq!(payload["debug"]["category_key"], "default");
    assert_eq!(payload["debug"]["town"], "Ames");
    assert_eq!(payload["debug"]["features"]["has_booking"], true);
    assert_eq!(payload["debug"]["features"]["load_seconds_est"], serde_json::Value::Null);
    assert_eq!(payload["meta"]["fetch"]["status_code"], 200);
    assert_eq!(payload["meta"]["features_raw"], payload["debug"]["features"]);
}

#[tokio::test]
async fn score_route_rejects_missing_business_name() {
    let router = lead_router(build_service(joes_pizza_fetcher()));

    let response = router
        .oneshot(post_score(json!({ "website_url": "joespizza.example" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("business_name"), "unexpected message: {message}");
}

#[tokio::test]
async fn score_route_rejects_malformed_json_with_error_payload() {
    let router = lead_router(build_service(joes_pizza_fetcher()));

    let response = router
        .oneshot(
            Request::post("/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"business_name\": "))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"].is_string());
}
