//! Integration tests for analyzer-service.
//!
//! These spawn the full application on a random port and exercise it over
//! HTTP. No live Anthropic credential is needed; the analyze flow is
//! covered separately against the router with a mock provider.

use analyzer_service::config::get_configuration;
use analyzer_service::services::metrics::init_metrics;
use analyzer_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::set_var("APP_SERVER__HOST", "127.0.0.1");
    std::env::set_var("APP_SERVER__PORT", "0"); // Random port
    std::env::set_var("ANTHROPIC_API_KEY", "test-api-key");

    init_metrics();

    let settings = get_configuration().expect("Failed to load configuration");
    let app = Application::build(settings)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "analyzer-service");
}

#[tokio::test]
async fn index_page_serves_the_form() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Sermon Analyzer"));
    assert!(body.contains("sermon-text"));
    assert!(body.contains("Analyze Sermon"));
}

#[tokio::test]
async fn metrics_endpoint_returns_exposition_format() {
    let port = spawn_app().await;
    let client = Client::new();

    // Hit another endpoint first so the counters have something to report.
    let _ = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .get(format!("http://localhost:{}/metrics", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("http_requests_total"));
}
