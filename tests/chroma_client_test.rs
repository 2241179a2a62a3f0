//! REST client tests against a mock Chroma server

mod common;

use chroma_binding::binding::{ChromaBinding, InvokeRequest};
use chroma_binding::chroma::{ChromaClient, ChromaStore, GetCollectionOptions};
use chroma_binding::error::{BindingError, ChromaError};
use common::properties;
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

const C1_JSON: &str = r#"{
    "name": "c1",
    "id": "7a0f1c4e-5a0b-4f4e-9a34-2c1f6c0b9d11",
    "metadata": {"hnsw:space": "l2", "type": "col"},
    "tenant": "default_tenant",
    "database": "default_database"
}"#;

fn binding_for(server: &mockito::ServerGuard, extra: &[(&str, &str)]) -> ChromaBinding {
    let url = server.url();
    let mut props = properties(&[("url", url.as_str())]);
    props.extend(properties(extra));
    ChromaBinding::init(&props).expect("binding should initialize")
}

#[tokio::test]
async fn test_reset_against_reachable_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/reset")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("true")
        .create_async()
        .await;

    let binding = binding_for(&server, &[]);
    let response = binding.invoke(&InvokeRequest::new("reset")).await.unwrap();

    assert_eq!(&response.data[..], b"true");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_version_is_raw_string() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/version")
        .with_status(200)
        .with_body(r#""0.4.24""#)
        .create_async()
        .await;

    let binding = binding_for(&server, &[]);
    let response = binding.invoke(&InvokeRequest::new("version")).await.unwrap();
    assert_eq!(&response.data[..], b"0.4.24");
}

#[tokio::test]
async fn test_heartbeat() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/heartbeat")
        .with_status(200)
        .with_body(r#"{"nanosecond heartbeat": 1712345678901234567}"#)
        .create_async()
        .await;

    let client = ChromaClient::new(&server.url(), None).unwrap();
    let heartbeat = client.heartbeat().await.unwrap();
    assert_eq!(heartbeat.nanosecond_heartbeat, 1_712_345_678_901_234_567);
}

#[tokio::test]
async fn test_create_collection_sends_distance_as_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/collections")
        .match_body(Matcher::PartialJson(json!({
            "name": "c1",
            "get_or_create": false,
            "metadata": {"hnsw:space": "l2", "type": "col"}
        })))
        .with_status(200)
        .with_body(C1_JSON)
        .create_async()
        .await;

    let binding = binding_for(&server, &[("openAIApiKey", "sk-test")]);
    let response = binding
        .invoke(&InvokeRequest::new("createCollection").with_data(
            r#"{"name":"c1","embeddingFunction":"openai","metadata":{"type":"col"},"distanceFunction":"l2"}"#,
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    let value: serde_json::Value = serde_json::from_slice(&response.data).unwrap();
    assert_eq!(value["name"], "c1");
    assert_eq!(value["id"], "7a0f1c4e-5a0b-4f4e-9a34-2c1f6c0b9d11");
    assert_eq!(value["embeddingFunction"], "openai");
    assert_eq!(value["distanceFunction"], "l2");
}

#[tokio::test]
async fn test_create_without_credential_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/collections")
        .expect(0)
        .create_async()
        .await;

    let binding = binding_for(&server, &[]);
    let err = binding
        .invoke(&InvokeRequest::new("createCollection").with_data(
            r#"{"name":"c1","embeddingFunction":"openai","distanceFunction":"l2"}"#,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, BindingError::Credential(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_returns_deleted_collection() {
    let mut server = mockito::Server::new_async().await;
    let get = server
        .mock("GET", "/api/v1/collections/c1")
        .with_status(200)
        .with_body(C1_JSON)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/v1/collections/c1")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let binding = binding_for(&server, &[]);
    let response = binding
        .invoke(&InvokeRequest::new("deleteCollection").with_data(r#"{"name":"c1"}"#))
        .await
        .unwrap();

    get.assert_async().await;
    delete.assert_async().await;
    let value: serde_json::Value = serde_json::from_slice(&response.data).unwrap();
    assert_eq!(value["name"], "c1");
}

#[tokio::test]
async fn test_missing_collection() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/collections/ghost")
        .with_status(404)
        .with_body(r#"{"error":"not found"}"#)
        .create_async()
        .await;

    let client = ChromaClient::new(&server.url(), None).unwrap();
    let err = client
        .get_collection("ghost", GetCollectionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BindingError::Upstream(ChromaError::CollectionNotFound(ref n)) if n == "ghost"));
}

#[tokio::test]
async fn test_server_error_surfaces_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/collections")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let binding = binding_for(&server, &[]);
    let err = binding
        .invoke(&InvokeRequest::new("listCollections"))
        .await
        .unwrap_err();

    match err {
        BindingError::Upstream(ChromaError::ApiError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/collections")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let client = ChromaClient::new(&server.url(), None).unwrap();
    let err = client.list_collections().await.unwrap_err();
    assert!(matches!(err, BindingError::Upstream(ChromaError::DecodingError(_))));
}

#[tokio::test]
async fn test_list_collections_decodes_array() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/collections")
        .with_status(200)
        .with_body(format!("[{}]", C1_JSON))
        .create_async()
        .await;

    let client = ChromaClient::new(&server.url(), None).unwrap();
    let collections = client.list_collections().await.unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].tenant.as_deref(), Some("default_tenant"));
}

#[tokio::test]
async fn test_operation_timeout_is_enforced() {
    // Accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let url = format!("http://{}", addr);
    let binding = ChromaBinding::init(&properties(&[
        ("url", url.as_str()),
        ("operationTimeout", "200ms"),
    ]))
    .unwrap();

    let started = std::time::Instant::now();
    let err = binding
        .invoke(&InvokeRequest::new("heartbeat"))
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(5));
    match err {
        BindingError::Upstream(ChromaError::NetworkError(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[test]
fn test_malformed_endpoint_is_config_error() {
    for url in ["http://", "http://exa mple.com", "http://[::1"] {
        let err = match ChromaBinding::init(&properties(&[("url", url)])) {
            Ok(_) => panic!("{url} should be rejected"),
            Err(e) => e,
        };
        assert!(matches!(err, BindingError::Config(_)), "{url}: {err:?}");
        assert_eq!(err.kind(), "config");
    }
}

#[test]
fn test_uppercase_scheme_accepted() {
    assert!(ChromaBinding::init(&properties(&[("url", "HTTP://localhost:8000")])).is_ok());
}
