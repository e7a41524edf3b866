//! Integration tests for the index, echo pages, and health endpoint.

mod common;

#[tokio::test]
async fn index_links_all_tools() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("service reachable")
        .text()
        .await
        .unwrap();

    assert!(body.contains("href=\"/request-info\""));
    assert!(body.contains("href=\"/form-data\""));
    assert!(body.contains("href=\"/phone-validator\""));

    shutdown.trigger();
}

#[tokio::test]
async fn request_info_echoes_query_headers_and_cookies() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!(
            "http://{}/request-info?foo=bar&foo=baz&q=hello%20world",
            addr
        ))
        .header("x-demo-header", "42")
        .header("cookie", "session=abc123; theme=dark")
        .send()
        .await
        .expect("service reachable")
        .text()
        .await
        .unwrap();

    // Query parameters, including the repeated key, in order.
    assert!(body.contains("<td>foo</td><td>bar</td>"));
    assert!(body.contains("<td>foo</td><td>baz</td>"));
    assert!(body.contains("<td>q</td><td>hello world</td>"));

    // Headers.
    assert!(body.contains("<td>x-demo-header</td><td>42</td>"));

    // Cookies.
    assert!(body.contains("<td>session</td><td>abc123</td>"));
    assert!(body.contains("<td>theme</td><td>dark</td>"));

    shutdown.trigger();
}

#[tokio::test]
async fn request_info_escapes_markup_in_values() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!(
            "http://{}/request-info?tag=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
            addr
        ))
        .send()
        .await
        .expect("service reachable")
        .text()
        .await
        .unwrap();

    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>alert"));

    shutdown.trigger();
}

#[tokio::test]
async fn form_data_get_renders_the_empty_form() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("http://{}/form-data", addr))
        .send()
        .await
        .expect("service reachable")
        .text()
        .await
        .unwrap();

    assert!(body.contains("<form method=\"post\" action=\"/form-data\">"));
    assert!(!body.contains("Submitted fields"));

    shutdown.trigger();
}

#[tokio::test]
async fn form_data_post_echoes_submitted_fields() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("http://{}/form-data", addr))
        .form(&[("name", "Alice"), ("message", "hi there")])
        .send()
        .await
        .expect("service reachable")
        .text()
        .await
        .unwrap();

    assert!(body.contains("Submitted fields"));
    assert!(body.contains("<td>name</td><td>Alice</td>"));
    assert!(body.contains("<td>message</td><td>hi there</td>"));

    shutdown.trigger();
}

#[tokio::test]
async fn health_reports_ok() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let health: serde_json::Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("service reachable")
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "request-inspector");

    shutdown.trigger();
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (addr, shutdown) = common::spawn_app().await;
    let client = reqwest::Client::new();

    // A fresh ID is generated when the client sends none.
    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("service reachable");
    let generated = res
        .headers()
        .get("x-request-id")
        .expect("response has request id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!generated.is_empty());

    // A client-supplied ID is echoed back.
    let res = client
        .get(format!("http://{}/", addr))
        .header("x-request-id", "test-id-123")
        .send()
        .await
        .expect("service reachable");
    assert_eq!(
        res.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "test-id-123"
    );

    shutdown.trigger();
}
