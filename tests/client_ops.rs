//! Endpoint-level tests for the four client operations.
//!
//! Each test stands up a wiremock server, asserts the exact request shape
//! the client sends (path, form fields) and feeds back a canned envelope.

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use westfax::{WestfaxClient, WestfaxError};

async fn client_for(server: &MockServer) -> WestfaxClient {
    WestfaxClient::with_base_url("user", "secret", "prod-1", &server.uri())
        .expect("Failed to build client")
}

fn json_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

// =============================================================================
// Ping
// =============================================================================

#[tokio::test]
async fn test_ping_round_trips_echo() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .and(body_string_contains("StringParams1=testping"))
        .respond_with(json_body(r#"{"Success":true,"Result":"testping"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.ping("testping").await.expect("Ping failed");

    assert!(response.is_success());
    assert_eq!(response.into_inner(), "testping");
}

#[tokio::test]
async fn test_ping_does_not_send_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .respond_with(json_body(r#"{"Success":true,"Result":"x"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.ping("x").await.expect("Ping failed");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("Password"), "ping must not carry credentials: {body}");
}

// =============================================================================
// GetFaxDescription
// =============================================================================

const DESCRIPTION_BODY: &str = r#"{
    "Success": true,
    "Result": [{
        "Id": "abc",
        "Direction": "Inbound",
        "PageCount": 3,
        "Status": "Completed",
        "Tag": "invoices"
    }]
}"#;

#[tokio::test]
async fn test_get_fax_description_returns_first_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxDescriptionsUsingIds/json"))
        .and(body_string_contains("Username=user"))
        .and(body_string_contains("Password=secret"))
        .and(body_string_contains("Cookies=false"))
        .and(body_string_contains("ProductId=prod-1"))
        // FaxIds1={"Id":"abc"} in form encoding
        .and(body_string_contains("FaxIds1=%7B%22Id%22%3A%22abc%22%7D"))
        .respond_with(json_body(DESCRIPTION_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_fax_description("abc")
        .await
        .expect("GetFaxDescription failed");

    assert!(response.is_success());
    let fax = response.into_inner();
    assert_eq!(fax.id, "abc");
    assert!(fax.is_inbound());
    assert_eq!(fax.page_count, 3);
    assert_eq!(fax.status.as_deref(), Some("Completed"));
    assert_eq!(fax.tag.as_deref(), Some("invoices"));
}

#[tokio::test]
async fn test_get_fax_description_empty_result_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxDescriptionsUsingIds/json"))
        .respond_with(json_body(r#"{"Success":true,"Result":[]}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_fax_description("missing")
        .await
        .expect_err("Expected an error for an empty result list");

    match err {
        WestfaxError::EmptyResult { fax_id, .. } => assert_eq!(fax_id, "missing"),
        other => panic!("Expected EmptyResult, got {other:?}"),
    }
}

// =============================================================================
// GetFaxDocument
// =============================================================================

const DOCUMENT_BODY: &str = r#"{
    "Success": true,
    "Result": [{
        "Id": "abc",
        "Direction": "Inbound",
        "PageCount": 3,
        "Status": "Completed",
        "Format": "pdf",
        "FaxFiles": [{
            "ContentLength": 8,
            "ContentType": "application/pdf",
            "FileContents": "JVBERi0x"
        }]
    }]
}"#;

#[tokio::test]
async fn test_get_fax_document_sends_pdf_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxDocuments/json"))
        .and(body_string_contains("FaxIds1=%7B%22Id%22%3A%22abc%22%7D"))
        .and(body_string_contains("Format=pdf"))
        .respond_with(json_body(DOCUMENT_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_fax_document("abc")
        .await
        .expect("GetFaxDocument failed");

    let fax = response.into_inner();
    assert_eq!(fax.id, "abc");
    assert_eq!(fax.page_count, 3);
    assert!(fax.has_document());

    // Payload stays base64 text exactly as delivered
    let file = fax.first_file().unwrap();
    assert_eq!(file.file_contents, "JVBERi0x");
    assert_eq!(file.content_length, 8);
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn test_get_fax_document_empty_result_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxDocuments/json"))
        .respond_with(json_body(r#"{"Success":true,"Result":[]}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_fax_document("missing")
        .await
        .expect_err("Expected an error for an empty result list");

    assert!(matches!(err, WestfaxError::EmptyResult { .. }));
}

// =============================================================================
// GetInboundFaxIdentifiers
// =============================================================================

#[tokio::test]
async fn test_get_inbound_fax_identifiers_returns_all_records() {
    let server = MockServer::start().await;

    let body = r#"{
        "Success": true,
        "Result": [
            {"Id": "one", "Direction": "Inbound", "PageCount": 1},
            {"Id": "two", "Direction": "Inbound", "PageCount": 4}
        ]
    }"#;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxIdentifiers/json"))
        .and(body_string_contains("Username=user"))
        .and(body_string_contains("StartDate=2022-01-11"))
        .and(body_string_contains("FaxDirection=Inbound"))
        .respond_with(json_body(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_inbound_fax_identifiers("2022-01-11")
        .await
        .expect("GetInboundFaxIdentifiers failed");

    assert_eq!(response.len(), 2);
    let ids: Vec<&str> = response.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["one", "two"]);
}

#[tokio::test]
async fn test_get_inbound_fax_identifiers_empty_list_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxIdentifiers/json"))
        .respond_with(json_body(r#"{"Success":true,"Result":[]}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_inbound_fax_identifiers("2022-01-11")
        .await
        .expect("An empty identifier list is a legitimate answer");

    assert!(response.is_success());
    assert!(response.is_empty());
}

// =============================================================================
// Error propagation
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.ping("x").await.expect_err("Expected a decode error");

    assert!(matches!(err, WestfaxError::ParseError(_)));
}

#[tokio::test]
async fn test_service_reported_failure_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Fax_GetFaxIdentifiers/json"))
        .respond_with(json_body(r#"{"Success":false,"Result":[]}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_inbound_fax_identifiers("2022-01-11")
        .await
        .expect("Success=false is delivered to the caller, not raised");

    assert!(!response.is_success());
}

#[tokio::test]
async fn test_http_error_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(r#"{"Message":"internal failure"}"#.to_string(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.ping("x").await.expect_err("Expected an API error");

    match err {
        WestfaxError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(message, "internal failure");
            assert_eq!(status_code, Some(500));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = WestfaxClient::with_base_url("user", "secret", "prod-1", &uri).unwrap();
    let err = client.ping("x").await.expect_err("Expected a transport error");

    assert!(matches!(err, WestfaxError::HttpError(_)));
}

// =============================================================================
// Shared-client concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .and(body_string_contains("StringParams1=left"))
        .respond_with(json_body(r#"{"Success":true,"Result":"left"}"#))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/Security_Ping/json"))
        .and(body_string_contains("StringParams1=right"))
        .respond_with(json_body(r#"{"Success":true,"Result":"right"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (left, right) = tokio::join!(client.ping("left"), client.ping("right"));

    assert_eq!(left.unwrap().into_inner(), "left");
    assert_eq!(right.unwrap().into_inner(), "right");
}
