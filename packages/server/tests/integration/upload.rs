use serde_json::json;

use crate::common::{TestApp, UPLOAD_BASE_URL, routes};

/// "hello" in base64.
const PAYLOAD: &str = "aGVsbG8=";

#[tokio::test]
async fn png_upload_is_stored_with_png_extension() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::UPLOAD_IMAGE,
            &json!({"image": PAYLOAD, "content_type": "image/png"}),
        )
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    let url = res.body["url"].as_str().unwrap();
    assert!(url.starts_with(UPLOAD_BASE_URL), "{url}");
    assert!(url.ends_with(".png"), "{url}");

    let key = url.rsplit('/').next().unwrap();
    let stored = std::fs::read(app.upload_dir.path().join(key)).unwrap();
    assert_eq!(stored, b"hello");
}

#[tokio::test]
async fn svg_falls_back_to_jpg() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::UPLOAD_IMAGE,
            &json!({"image": PAYLOAD, "content_type": "image/svg+xml"}),
        )
        .await;

    assert_eq!(res.status, 200);
    assert!(res.body["url"].as_str().unwrap().ends_with(".jpg"));
}

#[tokio::test]
async fn uploads_get_distinct_names() {
    let app = TestApp::spawn().await;
    let body = json!({"image": PAYLOAD});

    let a = app.post(routes::UPLOAD_IMAGE, &body).await;
    let b = app.post(routes::UPLOAD_IMAGE, &body).await;

    assert_ne!(a.body["url"], b.body["url"]);
}

#[tokio::test]
async fn missing_image_is_400_and_stores_nothing() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::UPLOAD_IMAGE, &json!({"content_type": "image/png"}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["error"], "image is required");
    let files: Vec<_> = std::fs::read_dir(app.upload_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name() != ".tmp")
        .collect();
    assert!(files.is_empty());
}

#[tokio::test]
async fn get_is_405() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::UPLOAD_IMAGE).await;

    assert_eq!(res.status, 405);
}
