//! Execution tests for Client::get.
//!
//! Uses wiremock to stand in for the Battle.net API. Requests reach the mock
//! through the full URL override, so everything after the host is exercised
//! exactly as composed for the real API.

use battlenet::{
    BattleNetError, CharacterStats, Client, Fetched, Field, Locale, Parameters, Region,
    RequestOptions,
};
use chrono::{TimeZone, Utc};
use enumflags2::bitflags;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[bitflags]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq)]
enum StatField {
    Health = 1 << 0,
    Power = 1 << 1,
    Strength = 1 << 2,
}

impl Field for StatField {
    fn name(self) -> &'static str {
        match self {
            StatField::Health => "Health",
            StatField::Power => "Power",
            StatField::Strength => "Strength",
        }
    }
}

fn wow_client() -> Client {
    Client::new("wow", Region::EU).unwrap()
}

fn signed_client() -> Client {
    Client::builder()
        .base_path("wow")
        .keys(Some("examplekey"), Some("examplesecret"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_character_stats_with_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/wow/character/region/name"))
        .and(query_param("fields", "health,power"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "health": 150000,
            "power": 40000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wow_client();
    let options = RequestOptions::new()
        .fields(StatField::Power | StatField::Health)
        .full_url(format!("{}/api/wow/character/region/name", mock_server.uri()));

    let stats = client
        .get::<CharacterStats>("character/region/name", options)
        .await
        .unwrap()
        .data()
        .expect("expected a body");

    assert_eq!(stats.health, 150_000);
    assert_eq!(stats.power, 40_000);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("fields=health,power"));
}

#[tokio::test]
async fn test_get_sends_parameters_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/wow/realm/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"realms": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = Parameters::new().with("realms", "medivh").with("fields", "raw");
    let options = RequestOptions::new()
        .parameters(params)
        .fields(StatField::Strength)
        .locale(Locale::en_GB)
        .full_url(format!("{}/api/wow/realm/status", mock_server.uri()));

    let _: Fetched<serde_json::Value> = wow_client().get("realm/status", options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("realms=medivh&fields=raw&fields=strength&locale=en_GB")
    );
}

#[tokio::test]
async fn test_get_not_modified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/wow/character/medivh/uther"))
        .and(header_exists("If-Modified-Since"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&mock_server)
        .await;

    let since = Utc.with_ymd_and_hms(2012, 6, 1, 0, 0, 0).unwrap();
    let options = RequestOptions::new()
        .if_modified_since(since)
        .full_url(format!("{}/api/wow/character/medivh/uther", mock_server.uri()));

    let fetched = wow_client()
        .get::<serde_json::Value>("character/medivh/uther", options)
        .await
        .unwrap();

    assert!(fetched.is_not_modified());

    // The header matcher splits on ',', so compare the raw value
    let requests = mock_server.received_requests().await.unwrap();
    let sent = requests[0].headers.get("if-modified-since").unwrap();
    assert_eq!(sent.to_str().unwrap(), "Fri, 01 Jun 2012 00:00:00 GMT");
}

#[tokio::test]
async fn test_get_modified_returns_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("If-Modified-Since"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"health": 1})))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new()
        .if_modified_since(Utc.with_ymd_and_hms(2012, 6, 1, 0, 0, 0).unwrap())
        .full_url(mock_server.uri());

    let fetched = wow_client()
        .get::<CharacterStats>("", options)
        .await
        .unwrap();

    assert_eq!(fetched.data().map(|s| s.health), Some(1));
}

#[tokio::test]
async fn test_unsigned_request_has_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let _: Fetched<serde_json::Value> = wow_client().get("", options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
    assert!(!requests[0].headers.contains_key("if-modified-since"));
}

#[tokio::test]
async fn test_signed_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/wow/character/medivh/uther"))
        .and(header_exists("Date"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_client();
    assert!(client.use_https());

    let options = RequestOptions::new()
        .full_url(format!("{}/api/wow/character/medivh/uther", mock_server.uri()));
    let _: Fetched<serde_json::Value> = client.get("character/medivh/uther", options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    let date = request.headers.get("date").unwrap().to_str().unwrap();
    let authorization = request.headers.get("authorization").unwrap().to_str().unwrap();

    let credentials =
        battlenet::Credentials::new(Some("examplekey"), Some("examplesecret")).unwrap();
    let expected = credentials
        .authorization("GET", date, "/api/wow/character/medivh/uther")
        .unwrap();

    assert!(date.ends_with(" GMT"));
    assert_eq!(authorization, expected);
}

#[tokio::test]
async fn test_api_error_uses_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "nok",
            "reason": "Character not found."
        })))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let err = wow_client()
        .get::<serde_json::Value>("character/medivh/nobody", options)
        .await
        .unwrap_err();

    match err {
        BattleNetError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(message, "Character not found.");
            assert_eq!(status_code, Some(404));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let err = wow_client()
        .get::<serde_json::Value>("", options)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_api_error_falls_back_to_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": 500,
            "message": "Internal server error"
        })))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let err = wow_client()
        .get::<serde_json::Value>("", options)
        .await
        .unwrap_err();

    match err {
        BattleNetError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(message, "Internal server error");
            assert_eq!(status_code, Some(500));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_empty_body_uses_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let err = wow_client()
        .get::<serde_json::Value>("", options)
        .await
        .unwrap_err();

    match err {
        BattleNetError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(message, "HTTP 403 Forbidden");
            assert_eq!(status_code, Some(403));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().full_url(mock_server.uri());
    let err = wow_client()
        .get::<CharacterStats>("", options)
        .await
        .unwrap_err();

    assert!(matches!(err, BattleNetError::ParseError(_)));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    // Nothing listens on port 1
    let options = RequestOptions::new().full_url("http://127.0.0.1:1/api/wow/realm/status");
    let err = wow_client()
        .get::<serde_json::Value>("", options)
        .await
        .unwrap_err();

    assert!(matches!(err, BattleNetError::HttpError(_)));
}
