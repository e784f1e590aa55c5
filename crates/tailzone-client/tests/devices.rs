//! Device listing against a mocked Tailscale API.

use serde_json::json;
use tailzone_client::{TailscaleClient, TailzoneError};
use tailzone_core::DeviceSource;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TailscaleClient {
    TailscaleClient::builder("tskey-api-test", "example.com")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_devices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tailnet/example.com/devices"))
        .and(header("authorization", "Bearer tskey-api-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "devices": [
                {
                    "hostname": "laptop",
                    "addresses": ["100.64.0.1", "fd7a:115c:a1e0::1"],
                    "name": "laptop.example.ts.net",
                    "os": "macOS"
                },
                {
                    "hostname": "nas",
                    "addresses": ["100.64.0.2"],
                    "name": "nas.example.ts.net",
                    "os": "linux"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client_for(&server).devices().list().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].hostname, "laptop");
    assert_eq!(devices[0].primary_address(), Some("100.64.0.1"));
    assert_eq!(devices[1].hostname, "nas");
}

#[tokio::test]
async fn test_success_without_devices_key_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tailnet/example.com/devices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "not what you expected" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(matches!(err, TailzoneError::Json(_)));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_device_source_impl() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tailnet/example.com/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "devices": [] })))
        .mount(&server)
        .await;

    let source: Box<dyn DeviceSource> = Box::new(client_for(&server));
    assert!(source.fetch_devices().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "API token invalid" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_unknown_tailnet() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "tailnet not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    match err {
        TailzoneError::NotFound { resource } => assert_eq!(resource, "tailnet not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert_eq!(err.status_code(), Some(502));
    assert_eq!(err.to_string(), "API error (502): bad gateway");
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(matches!(err, TailzoneError::Json(_)));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the discard port.
    let client = TailscaleClient::builder("tskey-api-test", "example.com")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.devices().list().await.unwrap_err();
    assert!(matches!(err, TailzoneError::Http(_)));
}
