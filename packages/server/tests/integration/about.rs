use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn get_on_empty_store_returns_empty_string() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ABOUT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["content"], "");
    assert_eq!(res.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn put_then_get_returns_trimmed_content() {
    let app = TestApp::spawn().await;

    let res = app
        .put(routes::ABOUT, &json!({"content": "  I build things.\n"}))
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["content"]["content"], "I build things.");
    assert!(res.body["content"]["id"].as_i64().is_some());

    let res = app.get(routes::ABOUT).await;
    assert_eq!(res.body["content"], "I build things.");
    assert_eq!(app.count_rows("about_me").await, 1);
}

#[tokio::test]
async fn repeated_puts_keep_a_single_row() {
    let app = TestApp::spawn().await;

    for text in ["first", "second", "third"] {
        let res = app.put(routes::ABOUT, &json!({ "content": text })).await;
        assert_eq!(res.status, 200);
    }

    assert_eq!(app.count_rows("about_me").await, 1);
    assert_eq!(app.get(routes::ABOUT).await.body["content"], "third");
}

#[tokio::test]
async fn blank_put_is_rejected_and_leaves_content() {
    let app = TestApp::spawn().await;
    app.put(routes::ABOUT, &json!({"content": "keep me"})).await;

    for body in [json!({"content": ""}), json!({"content": "   "}), json!({})] {
        let res = app.put(routes::ABOUT, &body).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "content is required");
    }

    assert_eq!(app.get(routes::ABOUT).await.body["content"], "keep me");
    assert_eq!(app.count_rows("about_me").await, 1);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = TestApp::spawn().await;

    let res = app
        .request(reqwest::Method::PUT, routes::ABOUT, Some("{oops".into()))
        .await;

    assert_eq!(res.status, 400);
    assert!(res.body["error"].as_str().is_some());
}

#[tokio::test]
async fn delete_is_405() {
    let app = TestApp::spawn().await;

    let res = app.delete(routes::ABOUT).await;

    assert_eq!(res.status, 405);
    assert_eq!(res.body["error"], "Method not allowed");
    assert_eq!(res.header("access-control-allow-origin"), Some("*"));
}
