//! Fetcher behavior against a mock HTTP server.

use edgeip_scrape::{build_client, fetch_page};
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let body = fetch_page(&client, &server.uri()).await.unwrap();
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        // wiremock's exact matcher splits received header values on commas,
        // so the UA ("KHTML, like Gecko") must be matched as its comma parts
        .and(headers(
            "user-agent",
            edgeip_scrape::USER_AGENT.split(',').map(str::trim).collect(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    fetch_page(&client, &server.uri()).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let err = fetch_page(&client, &server.uri()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn connection_refused_is_a_fetch_error() {
    // nothing listens on this port
    let client = build_client().unwrap();
    let err = fetch_page(&client, "http://127.0.0.1:9/").await.unwrap_err();
    assert!(err.is_transport());
}
