//! Integration tests for the execution engine client.
//!
//! Uses wiremock for HTTP mocking. Tests cover the submit/poll flow,
//! poll budget exhaustion, language mapping, and transport failures.

use std::time::Duration;

use codearena::config::JudgeConfig;
use codearena::error::AppError;
use codearena::judge::{CodeExecutor, Judge0Client};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> Judge0Client {
    let config = JudgeConfig {
        base_url: mock_server.uri(),
        api_host: "judge.test".to_string(),
        api_key: "test-key".to_string(),
        // Keep tests fast: a zero interval still suspends between polls
        poll_interval: Duration::ZERO,
        max_poll_attempts: 15,
    };
    Judge0Client::new(config)
}

#[tokio::test]
async fn test_execute_submits_and_polls_to_terminal_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .and(body_partial_json(json!({
            "source_code": "print(input()[::-1])",
            "language_id": 71,
            "stdin": "hello",
            "base64_encoded": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "tok-1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // First two polls: still processing
    Mock::given(method("GET"))
        .and(path("/submissions/tok-1"))
        .and(query_param("base64_encoded", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "id": 2, "description": "Processing" }
        })))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/submissions/tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "id": 3, "description": "Accepted" },
            "stdout": "olleh\n",
            "stderr": null,
            "compile_output": null,
            "time": "0.021",
            "memory": 3456
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .execute("print(input()[::-1])", "python", "hello")
        .await
        .expect("execute failed");

    assert_eq!(result.status.id, 3);
    assert_eq!(result.stdout.as_deref(), Some("olleh\n"));
    assert_eq!(result.runtime_ms(), 21.0);
    assert_eq!(result.memory_kb(), 3456);
}

#[tokio::test]
async fn test_poll_budget_exhaustion_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "tok-slow" })))
        .mount(&mock_server)
        .await;

    // The engine never leaves the queue
    Mock::given(method("GET"))
        .and(path("/submissions/tok-slow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "id": 1, "description": "In Queue" }
        })))
        .expect(15)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.execute("int main(){}", "c", "").await;

    assert!(matches!(result, Err(AppError::ExecutionTimeout)));
}

#[tokio::test]
async fn test_unknown_language_is_rejected_before_any_request() {
    let mock_server = MockServer::start().await;

    // No mocks mounted: any request would 404 and fail the test through
    // an unexpected error variant
    let client = test_client(&mock_server);
    let result = client.execute("BEGIN END.", "pascal", "").await;

    match result {
        Err(AppError::UnsupportedLanguage(lang)) => assert_eq!(lang, "pascal"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other.map(|_| ())),
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_a_judge_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.execute("print(1)", "python", "").await;

    assert!(matches!(result, Err(AppError::Judge(_))));
}

#[tokio::test]
async fn test_poll_failure_mid_flight_is_a_judge_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "tok-2" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/submissions/tok-2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.execute("print(1)", "python", "").await;

    assert!(matches!(result, Err(AppError::Judge(_))));
}
