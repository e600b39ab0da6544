use std::collections::BTreeMap;

use reqwest::{Client, Url};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use folio::io::contact_io::{self, ContactError};
use folio::io::translations_io::{self, TranslationLoadError, TranslationSource};

fn fixture_path() -> std::path::PathBuf {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("tests").join("data").join("translations.json")
}

/// Answers exactly one HTTP request and hands back the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (Url::parse(&format!("http://{addr}/endpoint")).unwrap(), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn sample_payload() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("email".to_string(), "ana@example.com".to_string()),
        ("message".to_string(), "Hola".to_string()),
        ("name".to_string(), "Ana".to_string()),
    ])
}

#[test]
fn test_parse_translations_valid() {
    let raw = translations_io::parse_translations(r#"{"es":{"a":"b"},"en":{"a":"c"}}"#).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw["es"]["a"], "b");
}

#[test]
fn test_parse_translations_not_object() {
    let err = translations_io::parse_translations("[1, 2]").unwrap_err();
    assert!(matches!(err, TranslationLoadError::NotAnObject));
}

#[test]
fn test_parse_translations_invalid_json() {
    let err = translations_io::parse_translations("{not json").unwrap_err();
    assert!(matches!(err, TranslationLoadError::Parse(_)));
}

#[test]
fn test_load_from_path_fixture() {
    let raw = translations_io::load_from_path(&fixture_path()).unwrap();
    assert!(raw.contains_key("es"));
    assert!(raw.contains_key("en"));
}

#[test]
fn test_load_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = translations_io::load_from_path(&dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, TranslationLoadError::Io(_)));
}

#[tokio::test]
async fn test_load_dispatches_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("translations.json");
    std::fs::write(&path, r#"{"es":{"siteTitle":"Hola"}}"#).unwrap();

    let raw = translations_io::load(&Client::new(), &TranslationSource::File(path))
        .await
        .unwrap();
    assert_eq!(raw["es"]["siteTitle"], "Hola");
}

#[tokio::test]
async fn test_fetch_translations_over_http() {
    let (url, server) = serve_once("200 OK", r#"{"en":{"siteTitle":"Portfolio"}}"#).await;

    let raw = translations_io::load(&Client::new(), &TranslationSource::Url(url))
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /endpoint"));
    assert_eq!(raw["en"]["siteTitle"], "Portfolio");
}

#[tokio::test]
async fn test_fetch_translations_non_success_status() {
    let (url, server) = serve_once("404 Not Found", "{}").await;

    let err = translations_io::fetch_translations(&Client::new(), url)
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, TranslationLoadError::Status(404)));
}

#[tokio::test]
async fn test_post_contact_sends_json_body() {
    let (url, server) = serve_once("200 OK", r#"{"success":"true"}"#).await;

    contact_io::post_contact(&Client::new(), &url, &sample_payload())
        .await
        .unwrap();
    let request = server.await.unwrap();
    let lowered = request.to_ascii_lowercase();

    assert!(request.starts_with("POST /endpoint"));
    assert!(lowered.contains("content-type: application/json"));
    assert!(lowered.contains("accept: application/json"));
    assert!(request.ends_with(r#"{"email":"ana@example.com","message":"Hola","name":"Ana"}"#));
}

#[tokio::test]
async fn test_post_contact_non_success_status() {
    let (url, server) = serve_once("500 Internal Server Error", "{}").await;

    let err = contact_io::post_contact(&Client::new(), &url, &sample_payload())
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ContactError::Status(500)));
}

#[tokio::test]
async fn test_post_contact_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/endpoint")).unwrap();

    let err = contact_io::post_contact(&Client::new(), &url, &sample_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::Transport(_)));
}
