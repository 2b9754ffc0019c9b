//! HTTP ERP client tests against a mock OData server

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use ecologic_server::{
    api::create_router,
    config::{Config, ErpConfig, ErpCredentials},
    features::{
        erp::{ErpClient, ErpClientError, ErpService, HttpErpClient, SerialNumberQuery},
        manual::UploadLimit,
        sensors::SensorRegistry,
        FeatureState,
    },
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use tower::ServiceExt;
use wiremock::{
    matchers::{header, method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

const API_KEY: &str = "test-key";

fn credentials(server: &MockServer) -> ErpCredentials {
    ErpConfig::new(API_KEY, server.uri()).credentials().unwrap()
}

fn client() -> HttpErpClient {
    HttpErpClient::new(Duration::from_secs(5)).unwrap()
}

fn page_query() -> SerialNumberQuery {
    SerialNumberQuery {
        top: 50,
        skip: 0,
        filter: None,
    }
}

fn sample_envelope() -> Value {
    json!({
        "d": {
            "results": [
                {
                    "Material": "M1",
                    "SerialNumber": "S1",
                    "Plant": "P1",
                    "StorageLocation": "L1",
                    "Batch": "",
                    "Equipment": null
                },
                {
                    "Material": "M1",
                    "SerialNumber": "S2",
                    "Plant": "P1",
                    "StorageLocation": "L2",
                    "Batch": "B-7",
                    "Equipment": "10000042"
                }
            ],
            "__count": "2"
        }
    })
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn test_fetch_sends_odata_parameters_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/A_MaterialSerialNumber"))
        .and(header("APIKey", API_KEY))
        .and(header("Accept", "application/json"))
        .and(query_param("$top", "50"))
        .and(query_param("$skip", "0"))
        .and(query_param("$inlinecount", "allpages"))
        .and(query_param_is_missing("$filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let list = client()
        .fetch_serial_numbers(&credentials(&server), &page_query())
        .await
        .unwrap()
        .simplify();

    assert_eq!(list.total_count, 2);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].batch, None);
    assert_eq!(list.items[0].equipment_id, None);
    assert_eq!(list.items[1].batch, Some(json!("B-7")));
    assert_eq!(list.items[1].equipment_id, Some(json!("10000042")));
}

#[tokio::test]
async fn test_fetch_forwards_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/A_MaterialSerialNumber"))
        .and(query_param("$top", "10"))
        .and(query_param("$skip", "30"))
        .and(query_param("$filter", "Plant eq '1010'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"results": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let query = SerialNumberQuery {
        top: 10,
        skip: 30,
        filter: Some("Plant eq '1010'".to_string()),
    };

    let list = client()
        .fetch_serial_numbers(&credentials(&server), &query)
        .await
        .unwrap()
        .simplify();

    assert_eq!(list.total_count, 0);
    assert!(list.items.is_empty());
}

#[tokio::test]
async fn test_trailing_slash_on_base_url_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/A_MaterialSerialNumber"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = ErpConfig::new(API_KEY, format!("{}/", server.uri()))
        .credentials()
        .unwrap();

    assert!(client()
        .fetch_serial_numbers(&credentials, &page_query())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/A_MaterialSerialNumber"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client()
        .fetch_serial_numbers(&credentials(&server), &page_query())
        .await
        .unwrap_err();

    match err {
        ErpClientError::Upstream { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "service unavailable");
        },
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client()
        .fetch_serial_numbers(&credentials(&server), &page_query())
        .await
        .unwrap_err();

    assert!(matches!(err, ErpClientError::Decode(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_envelope())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = HttpErpClient::new(Duration::from_millis(200)).unwrap();
    let err = client
        .fetch_serial_numbers(&credentials(&server), &page_query())
        .await
        .unwrap_err();

    assert!(matches!(err, ErpClientError::Timeout));
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_transport_error() {
    let credentials = ErpConfig::new(API_KEY, "http://127.0.0.1:1").credentials().unwrap();

    let err = client()
        .fetch_serial_numbers(&credentials, &page_query())
        .await
        .unwrap_err();

    assert!(matches!(err, ErpClientError::Transport(_)));
}

/// Upstream that answers 503 with a body shorter than its `Content-Length`
async fn truncated_error_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(
                b"HTTP/1.1 503 Service Unavailable\r\n\
                  Content-Type: text/plain\r\n\
                  Content-Length: 100\r\n\r\n\
                  service unavail",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_unreadable_error_body_is_not_swallowed() {
    let base = truncated_error_upstream().await;
    let credentials = ErpConfig::new(API_KEY, base).credentials().unwrap();

    let err = client()
        .fetch_serial_numbers(&credentials, &page_query())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ErpClientError::Transport(_) | ErpClientError::Decode(_)),
        "unexpected error: {:?}",
        err
    );
    assert!(!matches!(err, ErpClientError::Upstream { .. }));
}

// ============================================================================
// Endpoint against the mock upstream
// ============================================================================

async fn get_serial_numbers(server: &MockServer, uri: &str) -> (StatusCode, Value) {
    let mut config = Config::default();
    config.erp = ErpConfig::new(API_KEY, server.uri());

    let state = FeatureState::new(
        SensorRegistry::new(),
        ErpService::from_config(&config.erp).unwrap(),
        UploadLimit(config.upload.max_bytes),
    );
    let router = create_router(state, &config);

    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_endpoint_returns_simplified_projection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/A_MaterialSerialNumber"))
        .and(query_param("$top", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_serial_numbers(&server, "/erp/serial-numbers?top=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 2);
    assert_eq!(
        body["items"][0],
        json!({
            "material": "M1",
            "serial": "S1",
            "plant": "P1",
            "location": "L1",
            "batch": null,
            "equipment_id": null
        })
    );
}

#[tokio::test]
async fn test_endpoint_passes_upstream_failure_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_serial_numbers(&server, "/erp/serial-numbers").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["message"], "service unavailable");
}
