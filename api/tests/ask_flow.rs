use std::sync::Arc;

use api::{AppState, create_router};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use messages_client::{MemberMessage, MessagesClient, MessagesClientConfig, MessagesError};
use qa_engine::{FetchFuture, MessageSource, NO_ANSWER};
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

/// In-memory upstream.
struct Fixture(fn() -> Result<Vec<MemberMessage>, MessagesError>);

impl MessageSource for Fixture {
    fn fetch_messages(&self) -> FetchFuture<'_> {
        let out = (self.0)();
        Box::pin(async move { out })
    }
}

fn alice_and_bob() -> Result<Vec<MemberMessage>, MessagesError> {
    Ok(serde_json::from_value(json!([
        {"user_name": "Alice", "message": "I like hiking"},
        {"user_name": "Bob", "message": "I like swimming"}
    ]))
    .unwrap())
}

fn app_with(source: impl MessageSource + 'static) -> Router {
    create_router(Arc::new(AppState::new(Arc::new(source))))
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "non-JSON body: status={} body={}",
            status,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, value)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_against(base: &str) -> Router {
    let client = MessagesClient::new(MessagesClientConfig::new(base)).unwrap();
    app_with(client)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(app_with(Fixture(alice_and_bob)), get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn get_ask_returns_best_match() {
    let (status, body) = send(
        app_with(Fixture(alice_and_bob)),
        get_req("/ask?question=What%20does%20Alice%20like%3F"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"answer": "Alice: I like hiking"}));
}

#[tokio::test]
async fn post_ask_returns_best_match() {
    let (status, body) = send(
        app_with(Fixture(alice_and_bob)),
        post_json("/ask", json!({"question": "Who likes swimming?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Bob: I like swimming");
}

#[tokio::test]
async fn unmatched_question_gets_fallback_sentence() {
    let (status, body) = send(
        app_with(Fixture(alice_and_bob)),
        get_req("/ask?question=zanzibar"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], NO_ANSWER);
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let (status, body) = send(
        app_with(Fixture(alice_and_bob)),
        post_json("/ask", json!({"question": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "EMPTY_QUESTION");
    assert_eq!(body["message"], "Question must not be empty");
    assert_eq!(body["detail"], "Question must not be empty");
}

#[tokio::test]
async fn stopword_only_question_is_rejected() {
    let (status, body) = send(
        app_with(Fixture(alice_and_bob)),
        get_req("/ask?question=what%20is%20the"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Could not parse meaningful tokens from question"
    );
}

#[tokio::test]
async fn missing_question_is_unprocessable() {
    let app = app_with(Fixture(alice_and_bob));

    let (status, body) = send(app.clone(), get_req("/ask")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "UNPROCESSABLE_ENTITY");

    let (status, _) = send(app, post_json("/ask", json!({"q": "alice"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_upstream_is_internal_error() {
    let (status, body) = send(
        app_with(Fixture(|| Ok(Vec::new()))),
        get_req("/ask?question=alice"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "No messages available from upstream API");
    assert_eq!(body["detail"], "No messages available from upstream API");
}

#[tokio::test]
async fn falsy_items_wrapper_means_no_messages() {
    let base = spawn_upstream(Router::new().route(
        "/messages",
        get(|| async { axum::Json(json!({"items": {}})) }),
    ))
    .await;

    let (status, body) = send(app_against(&base), get_req("/ask?question=alice")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "No messages available from upstream API");
}

#[tokio::test]
async fn upstream_payment_required_is_service_unavailable() {
    let base = spawn_upstream(Router::new().route(
        "/messages",
        get(|| async { StatusCode::PAYMENT_REQUIRED }),
    ))
    .await;

    let (status, body) = send(app_against(&base), get_req("/ask?question=alice")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "UPSTREAM_UNAVAILABLE");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Cannot fetch member messages at this time.")
    );
    assert_eq!(body["detail"], body["message"]);
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let base = spawn_upstream(Router::new().route(
        "/messages",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let (status, body) = send(app_against(&base), get_req("/ask?question=alice")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error calling /messages API")
    );
}

#[tokio::test]
async fn upstream_bad_shape_is_internal_error() {
    let base = spawn_upstream(Router::new().route(
        "/messages",
        get(|| async { axum::Json(json!({"data": []})) }),
    ))
    .await;

    let (status, body) = send(app_against(&base), get_req("/ask?question=alice")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Unexpected /messages API format");
    assert_eq!(body["detail"], "Unexpected /messages API format");
}

#[tokio::test]
async fn real_client_answers_from_items_wrapper() {
    let base = spawn_upstream(Router::new().route(
        "/messages",
        get(|| async {
            axum::Json(json!({"items": [
                {"user_name": "Carol", "message": "Booked a table at Nobu for Friday"},
                {"user_name": "Dave", "message": "Need a table for two"}
            ]}))
        }),
    ))
    .await;

    let (status, body) = send(
        app_against(&base),
        post_json("/ask", json!({"question": "Which table did Carol book?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Carol: Booked a table at Nobu for Friday");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = Request::builder()
        .uri("/health")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app_with(Fixture(alice_and_bob)).oneshot(req).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
