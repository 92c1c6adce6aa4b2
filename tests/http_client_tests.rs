//! Typed REST client against a local HTTP server.

mod support;

use std::time::Duration;

use polyfeed::adapter::outbound::http::{ExpectedStatus, Resource, ResourceClient};
use polyfeed::error::FetchError;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use support::http::{CannedResponse, TestServer};

#[derive(Debug, PartialEq, Deserialize)]
struct Widget {
    id: u32,
    name: String,
}

#[derive(Serialize)]
struct NewWidget<'a> {
    name: &'a str,
}

fn client(server: &TestServer) -> ResourceClient {
    ResourceClient::new(server.base_url.clone(), Duration::from_secs(5))
}

#[tokio::test]
async fn get_decodes_body_on_expected_status() {
    let server = TestServer::always(CannedResponse::json(200, r#"{"id": 7, "name": "gear"}"#)).await;

    let widget: Resource<Widget> = client(&server)
        .get("/widgets/7", &ExpectedStatus::ok())
        .await
        .unwrap();

    assert_eq!(
        widget,
        Resource::Content(Widget {
            id: 7,
            name: "gear".into()
        })
    );
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/widgets/7");
}

#[tokio::test]
async fn unexpected_status_reports_expected_actual_and_trimmed_body() {
    let server = TestServer::always(CannedResponse::json(500, "  rate limited\n")).await;

    let err = client(&server)
        .get::<Widget>("/widgets", &ExpectedStatus::ok())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("200"), "{message}");
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("rate limited"), "{message}");
    assert!(message.ends_with(": rate limited"), "{message}");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn status_outside_a_multi_code_set_is_rejected() {
    let server = TestServer::always(CannedResponse::json(202, "{}")).await;
    let expected = ExpectedStatus::new([StatusCode::OK, StatusCode::CREATED]);

    let err = client(&server)
        .get::<serde_json::Value>("/jobs", &expected)
        .await
        .unwrap_err();

    match err {
        FetchError::UnexpectedStatus {
            expected, actual, ..
        } => {
            assert_eq!(actual, 202);
            assert_eq!(expected.to_string(), "200/201");
        }
        other => panic!("expected status mismatch, got {other}"),
    }
}

#[tokio::test]
async fn any_status_in_the_set_is_accepted() {
    let server = TestServer::always(CannedResponse::json(201, r#"{"id": 1, "name": "new"}"#)).await;
    let expected = ExpectedStatus::new([StatusCode::OK, StatusCode::CREATED]);

    let widget = client(&server).get_content::<Widget>("/widgets", &expected).await.unwrap();
    assert_eq!(widget.id, 1);
}

#[tokio::test]
async fn no_content_is_never_decoded() {
    let server = TestServer::always(CannedResponse::no_content()).await;
    let expected = ExpectedStatus::new([StatusCode::NO_CONTENT]);

    // Widget cannot be decoded from an empty body; 204 must not try.
    let result: Resource<Widget> = client(&server).get("/widgets/7", &expected).await.unwrap();
    assert!(result.is_no_content());
    assert_eq!(result.into_option(), None);
}

#[tokio::test]
async fn no_content_where_content_is_required() {
    let server = TestServer::always(CannedResponse::no_content()).await;
    let expected = ExpectedStatus::new([StatusCode::OK, StatusCode::NO_CONTENT]);

    let err = client(&server)
        .get_content::<Widget>("/widgets/7", &expected)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::MissingContent { .. }));
}

#[tokio::test]
async fn invalid_json_is_a_decode_error_not_a_status_error() {
    let server = TestServer::always(CannedResponse::json(200, "<html>oops</html>")).await;

    let err = client(&server)
        .get::<Widget>("/widgets/7", &ExpectedStatus::ok())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "got {err}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let server = TestServer::always(CannedResponse::json(200, r#"{"id": "seven"}"#)).await;

    let err = client(&server)
        .get::<Widget>("/widgets/7", &ExpectedStatus::ok())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn post_sends_json_body_with_content_type() {
    let server = TestServer::always(CannedResponse::json(201, r#"{"id": 9, "name": "bolt"}"#)).await;
    let expected = ExpectedStatus::from(StatusCode::CREATED);

    let created: Resource<Widget> = client(&server)
        .post("/widgets", Some(&NewWidget { name: "bolt" }), &expected)
        .await
        .unwrap();
    assert_eq!(created.into_option().map(|w| w.id), Some(9));

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"name": "bolt"}));
}

#[tokio::test]
async fn requests_without_body_carry_no_content_type() {
    let server = TestServer::always(CannedResponse::json(200, r#"{"id": 1, "name": "a"}"#)).await;
    let client = client(&server);

    let _: Resource<Widget> = client.get("/widgets/1", &ExpectedStatus::ok()).await.unwrap();
    let _: Resource<Widget> = client
        .post::<Widget, ()>("/widgets/1/touch", None, &ExpectedStatus::ok())
        .await
        .unwrap();

    for request in server.requests() {
        assert_eq!(request.header("content-type"), None, "{}", request.method);
    }
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let server = TestServer::always(
        CannedResponse::json(200, r#"{"id": 1, "name": "late"}"#).delayed(Duration::from_secs(2)),
    )
    .await;
    let client = ResourceClient::new(server.base_url.clone(), Duration::from_millis(100));

    let started = std::time::Instant::now();
    let err = client
        .get::<Widget>("/widgets/1", &ExpectedStatus::ok())
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(2));
    match err {
        FetchError::Transport { method, source, .. } => {
            assert_eq!(method, Method::GET);
            assert!(source.is_timeout(), "expected timeout, got {source}");
        }
        other => panic!("expected transport timeout, got {other}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ResourceClient::new(format!("http://{addr}"), Duration::from_secs(2));
    let err = client
        .get::<Widget>("/widgets", &ExpectedStatus::ok())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }), "got {err}");
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = TestServer::always(CannedResponse::json(200, "[]")).await;
    let client = ResourceClient::new(format!("{}/", server.base_url), Duration::from_secs(5));

    let list: Vec<Widget> = client.get_content("/widgets", &ExpectedStatus::ok()).await.unwrap();
    assert!(list.is_empty());
    assert_eq!(server.requests()[0].target, "/widgets");
}
