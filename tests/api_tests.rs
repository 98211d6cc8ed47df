//! Live HTTP server tests
//!
//! Run with: cargo test --test api_tests

use nratakit::api::serve;
use nratakit::config::Config;
use reqwest::{redirect, StatusCode};
use tokio::net::TcpListener;

/// Start the server on an ephemeral port and return its base URL
async fn start_test_server(config: Config) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = serve(config, listener).await;
    });
    (format!("http://{}", addr), handle)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base, handle) = start_test_server(Config::default()).await;

    let response = client()
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"], "healthy");

    handle.abort();
}

#[tokio::test]
async fn test_guard_over_the_wire() {
    let (base, handle) = start_test_server(Config::default()).await;
    let client = client();

    let response = client
        .get(format!("{}/dashboard/settings", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/login");

    let response = client
        .get(format!("{}/login", base))
        .header("cookie", "__Secure-better-auth.session_token=abc")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/dashboard");

    let response = client
        .get(format!("{}/robots.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    handle.abort();
}
