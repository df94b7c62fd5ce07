use std::net::TcpListener;
use std::sync::Once;

use analyser_engine::{
    AnalysisClient, ApiConfig, ClientSettings, FailureKind, ReqwestAnalysisClient,
    FAILED_TO_ANALYZE, GENERIC_FAILURE,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn client_for(server: &MockServer) -> ReqwestAnalysisClient {
    let config = ApiConfig::resolve(&format!("{}/api", server.uri()), "http://unused.invalid")
        .expect("config");
    ReqwestAnalysisClient::new(config, ClientSettings::default()).expect("client")
}

#[tokio::test]
async fn posts_url_as_json_once_and_returns_analysis() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "analysis": "# Hi" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let analysis = client.analyze("https://example.com").await.expect("analysis");

    assert_eq!(analysis, "# Hi");
}

#[tokio::test]
async fn server_reported_failure_uses_server_message() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "analysis": "",
            "error": "bad site"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::ServerReported);
    assert_eq!(err.message, "bad site");
    assert_eq!(err.to_string(), "bad site");
}

#[tokio::test]
async fn server_reported_failure_without_message_falls_back() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "error": null })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.message, FAILED_TO_ANALYZE);
}

#[tokio::test]
async fn error_status_with_json_body_prefers_server_message() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Invalid URL. URL must start with http:// or https://"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(
        err.message,
        "Invalid URL. URL must start with http:// or https://"
    );
}

#[tokio::test]
async fn error_status_without_body_uses_status_message() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.message, "Request failed with status code 502");
}

#[tokio::test]
async fn unparsable_success_body_falls_back() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidResponse);
    assert_eq!(err.message, FAILED_TO_ANALYZE);
    assert!(err.detail.is_some());
}

#[tokio::test]
async fn connection_failure_uses_generic_fallback() {
    init_logging();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let config = ApiConfig::resolve("/api", &format!("http://127.0.0.1:{port}")).expect("config");
    let client = ReqwestAnalysisClient::new(config, ClientSettings::default()).expect("client");

    let err = client.analyze("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, GENERIC_FAILURE);
    assert!(err.detail.is_some());
}

#[tokio::test]
async fn health_returns_service_message() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Web Analyser API is running" })),
        )
        .mount(&server)
        .await;

    let message = client_for(&server).health().await.expect("health");

    assert_eq!(message, "Web Analyser API is running");
}

#[tokio::test]
async fn health_reports_error_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}
