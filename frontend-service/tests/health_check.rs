mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_returns_200() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "frontend");
    assert!(body["ts"].is_u64());
}

#[tokio::test]
async fn health_check_timestamp_never_decreases() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let mut previous = 0;
    for _ in 0..5 {
        let body: serde_json::Value = client
            .get(format!("{}/health", app.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        let ts = body["ts"].as_u64().unwrap();
        assert!(ts >= previous);
        previous = ts;
    }
}

#[tokio::test]
async fn index_page_is_served_over_http() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Engine OS — Frontend"));
}
