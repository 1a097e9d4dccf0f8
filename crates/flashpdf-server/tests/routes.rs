use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use flashpdf_export::styles::DocumentStyles;
use flashpdf_server::config::ServerConfig;
use flashpdf_server::error::UPLOAD_TOO_LARGE;
use flashpdf_server::routes::generate::{PDF_CONTENT_TYPE, download_filename};
use flashpdf_server::state::AppState;

const BOUNDARY: &str = "flashpdf-test-boundary";

fn app() -> Router {
    app_with(&ServerConfig::default())
}

fn app_with(config: &ServerConfig) -> Router {
    let state = AppState::new(DocumentStyles::default()).unwrap();
    flashpdf_server::router(state, config)
}

fn multipart_body(parts: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        if *name == "file" {
            body.push_str(
                "Content-Disposition: form-data; name=\"file\"; filename=\"words.json\"\r\n\
                 Content-Type: application/json\r\n\r\n",
            );
        } else {
            body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            ));
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn upload(parts: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

const WORDS: &str = r#"[
    {"word": "serene", "meanings": ["calm and peaceful => The lake was serene. It glowed."], "synonyms": ["tranquil"], "antonyms": []},
    {"word": "vivid", "meanings": ["bright"], "synonyms": [], "antonyms": ["dull"]}
]"#;

#[tokio::test]
async fn form_page_renders() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(html.contains("name=\"file\""));
    assert!(!html.contains("Error:"));
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn upload_returns_pdf_attachment() {
    let response = app().oneshot(upload(&[("file", WORDS)])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], PDF_CONTENT_TYPE);

    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\""));
    assert!(disposition.ends_with("_styled_words.pdf\""));

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn inline_layout_is_accepted() {
    let response = app()
        .oneshot(upload(&[("file", WORDS), ("layout", "inline")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_shows_one_error() {
    let response = app()
        .oneshot(upload(&[("file", "[{\"word\": ")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_ne!(response.headers()[header::CONTENT_TYPE], PDF_CONTENT_TYPE);

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(html.matches("Error:").count(), 1);
    assert!(!html.contains("%PDF"));
}

#[tokio::test]
async fn missing_field_is_a_processing_error() {
    let response = app()
        .oneshot(upload(&[("file", r#"[{"word": "x", "meanings": []}]"#)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("missing field"));
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let response = app()
        .oneshot(upload(&[("layout", "bulleted")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("no JSON file was uploaded"));
}

#[tokio::test]
async fn unknown_layout_is_rejected() {
    let response = app()
        .oneshot(upload(&[("file", WORDS), ("layout", "sideways")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn filename_uses_two_digit_date() {
    let date = jiff::civil::date(2025, 3, 7);
    assert_eq!(download_filename(date), "250307_styled_words.pdf");
}

#[tokio::test]
async fn oversized_upload_names_the_size_problem() {
    let config = ServerConfig {
        max_upload_bytes: 64,
        ..ServerConfig::default()
    };
    let response = app_with(&config)
        .oneshot(upload(&[("file", WORDS)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(html.matches("Error:").count(), 1);
    assert!(html.contains(UPLOAD_TOO_LARGE));
}
