mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use helpers::app_state;
use http_body_util::BodyExt;
use joi::server::build_api_router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router whose generation client points at a closed port.
fn offline_router() -> Router {
    build_api_router(app_state("http://127.0.0.1:9"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("handler should respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = send(offline_router(), get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn ask_returns_answer_with_sources() {
    let (status, body) = send(
        offline_router(),
        post_json("/api/ask", json!({"query": "What certifications does Michael have?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "certifications");
    assert_eq!(body["category"], "certifications");
    assert_eq!(body["sources"].as_array().unwrap().len(), 8);
    assert_eq!(body["sources"][0]["id"], "cert-0");
    assert!(body["text"]
        .as_str()
        .unwrap()
        .starts_with("Regarding certifications,"));
}

#[tokio::test]
async fn ask_rejects_blank_query() {
    let (status, body) = send(
        offline_router(),
        post_json("/api/ask", json!({"query": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "query must not be empty");
}

#[tokio::test]
async fn search_returns_scored_chunks() {
    let (status, body) = send(
        offline_router(),
        post_json("/api/search", json!({"query": "kubernetes docker", "limit": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["results"][0]["chunk"]["id"], "skills-backendInfrastructure");
    assert_eq!(body["results"][0]["relevance_score"], 2);
    assert_eq!(body["results"][1]["chunk"]["id"], "project-2");
    assert_eq!(
        body["results"][1]["chunk"]["metadata"]["title"],
        "Custom LLM Fine-tuning Pipeline"
    );
}

#[tokio::test]
async fn search_limit_is_clamped_and_defaulted() {
    let (status, body) = send(
        offline_router(),
        post_json("/api/search", json!({"query": "michael", "limit": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);

    let (status, body) =
        send(offline_router(), post_json("/api/search", json!({"query": "michael"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn chunks_filter_by_category() {
    let (status, body) = send(offline_router(), get("/api/chunks?category=projects")).await;
    assert_eq!(status, StatusCode::OK);
    let chunks = body.as_array().unwrap();
    assert_eq!(chunks.len(), 4);
    assert!(chunks.iter().all(|c| c["category"] == "projects"));

    let (status, body) = send(offline_router(), get("/api/chunks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn chunks_reject_unknown_category() {
    let (status, body) = send(offline_router(), get("/api/chunks?category=hobbies")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown category: hobbies");
}

#[tokio::test]
async fn chat_relays_model_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "Happy to help!"})),
        )
        .mount(&server)
        .await;

    let app = build_api_router(app_state(&server.uri()));
    let (status, body) = send(
        app,
        post_json("/api/chat", json!({"message": "How can I contact Michael?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Happy to help!");
    assert_eq!(body["context"]["intent"], "contact");
}

#[tokio::test]
async fn chat_without_context_omits_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hello!"})))
        .mount(&server)
        .await;

    let app = build_api_router(app_state(&server.uri()));
    let (status, body) = send(
        app,
        post_json(
            "/api/chat",
            json!({"message": "How can I contact Michael?", "use_context": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"reply": "Hello!"}));
}

#[tokio::test]
async fn chat_maps_generation_failure_to_bad_gateway() {
    let (status, body) = send(
        offline_router(),
        post_json("/api/chat", json!({"message": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("make sure Ollama is running locally"));
}
