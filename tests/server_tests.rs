use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use stack_advisor::server::{router, AppState};

fn questionnaire() -> Value {
    json!({
        "projectType": "scalable",
        "complexity": "complex",
        "performance": "critical",
        "budget": "high",
        "teamSkill": "experienced",
        "dataSensitivity": "medium",
        "traffic": "medium",
        "timeline": "1 year",
        "goal": "long-term",
        "aiAssistance": "none",
        "description": "Multi-tenant analytics"
    })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = router(AppState::default());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_json_recommendation() {
    let app = router(AppState::default());
    let response = app
        .oneshot(json_post("/v1/recommendations", &questionnaire()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let record: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(record["profileLabel"], "Scalable SaaS / Consumer App");
    assert_eq!(record["metrics"]["complexityScore"], 85);
    assert_eq!(record["metrics"]["costScore"], 80);
    assert_eq!(record["metrics"]["riskScore"], 50);
    assert_eq!(record["context"], "Multi-tenant analytics");
    assert!(record["architectureSummary"]
        .as_str()
        .unwrap()
        .contains("Use asynchronous processing (queues, workers) for slow operations."));
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = router(AppState::default());
    let mut body = questionnaire();
    body["budget"] = json!("");
    body.as_object_mut().unwrap().remove("traffic");

    let response = app.oneshot(json_post("/v1/recommendations", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(error["missing"], json!(["budget", "traffic"]));
    assert_eq!(error["error"], "missing required field(s): budget, traffic");
}

#[tokio::test]
async fn test_rendered_markdown() {
    let app = router(AppState::default());
    let response = app
        .oneshot(json_post("/v1/recommendations/render?format=markdown", &questionnaire()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/markdown; charset=utf-8"
    );
    let body = body_string(response).await;
    assert!(body.starts_with("# Scalable SaaS / Consumer App – COMPLEX / CRITICAL"));
}

#[tokio::test]
async fn test_rendered_defaults_to_html() {
    let app = router(AppState::default());
    let response = app
        .oneshot(json_post("/v1/recommendations/render", &questionnaire()))
        .await
        .unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert!(body_string(response).await.contains("Multi-tenant analytics"));
}

#[tokio::test]
async fn test_form_round_trip() {
    let app = router(AppState::default());

    let page = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    assert!(body_string(page).await.contains("action=\"/recommend\""));

    let form = "projectType=social&complexity=simple&performance=not-critical&budget=minimal\
        &teamSkill=solo-junior&dataSensitivity=low&traffic=low&timeline=2+weeks&goal=ship-fast\
        &aiAssistance=vibe&description=";
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Social / Community Platform – SIMPLE / NOT CRITICAL"));
    assert!(!html.contains("Your project context"));
}

#[tokio::test]
async fn test_incomplete_form_shows_notice() {
    let app = router(AppState::default());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("projectType=social"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_string(response)
        .await
        .contains("Please fill all the required fields"));
}

#[tokio::test]
async fn test_knowledge_base_endpoint() {
    let app = router(AppState::default());
    let response = app
        .oneshot(Request::builder().uri("/v1/knowledge-base").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let kb: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(kb["profiles"]["small-team"]["label"], "Small Team / Internal Tool");
    assert_eq!(kb["pitfalls"].as_array().unwrap().len(), 6);
}
