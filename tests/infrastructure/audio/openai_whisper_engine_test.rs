use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;

use echolingo::application::ports::{TranscriptionEngine, TranscriptionError};
use echolingo::infrastructure::audio::OpenAiWhisperEngine;

use crate::helpers::start_mock_server;

#[derive(Default, Clone)]
struct CapturedRequest {
    authorization: Option<String>,
    fields: Vec<(String, Option<String>, Vec<u8>)>,
}

fn capturing_whisper_server(
    status: StatusCode,
    body: &'static str,
) -> (Router, Arc<Mutex<CapturedRequest>>) {
    let captured = Arc::new(Mutex::new(CapturedRequest::default()));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(move |headers: HeaderMap, mut multipart: Multipart| {
            let sink = Arc::clone(&sink);
            async move {
                let mut request = CapturedRequest {
                    authorization: headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from),
                    fields: Vec::new(),
                };
                while let Ok(Some(field)) = multipart.next_field().await {
                    let name = field.name().unwrap_or_default().to_string();
                    let file_name = field.file_name().map(String::from);
                    let data = field.bytes().await.unwrap().to_vec();
                    request.fields.push((name, file_name, data));
                }
                *sink.lock().unwrap() = request;
                (status, body).into_response()
            }
        }),
    );

    (app, captured)
}

fn field<'a>(captured: &'a CapturedRequest, name: &str) -> &'a (String, Option<String>, Vec<u8>) {
    captured.fields.iter().find(|(n, _, _)| n == name).unwrap()
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (app, _captured) = capturing_whisper_server(StatusCode::OK, "  Hello from Whisper\n");
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = OpenAiWhisperEngine::new("sk-test".to_string(), Some(format!("{}/v1", base_url)), None);

    let result = engine.transcribe(b"fake audio bytes", "clip.wav").await;

    assert_eq!(result.unwrap(), "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_audio_when_transcribing_then_sends_model_format_file_and_bearer_key() {
    let (app, captured) = capturing_whisper_server(StatusCode::OK, "text");
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = OpenAiWhisperEngine::new(
        "sk-test".to_string(),
        Some(format!("{}/v1/", base_url)),
        Some("whisper-large".to_string()),
    );

    engine.transcribe(b"RIFFdata", "clip.wav").await.unwrap();

    let captured = captured.lock().unwrap().clone();
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(field(&captured, "model").2, b"whisper-large");
    assert_eq!(field(&captured, "response_format").2, b"text");
    let (_, file_name, data) = field(&captured, "file");
    assert_eq!(file_name.as_deref(), Some("clip.wav"));
    assert_eq!(data, b"RIFFdata");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_request_failed() {
    let (app, _captured) = capturing_whisper_server(
        StatusCode::UNAUTHORIZED,
        r#"{"error": {"message": "Incorrect API key provided"}}"#,
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = OpenAiWhisperEngine::new("sk-bad".to_string(), Some(format!("{}/v1", base_url)), None);

    let result = engine.transcribe(b"audio", "clip.mp3").await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_transcribing_then_returns_api_request_failed() {
    let engine = OpenAiWhisperEngine::new(
        "sk-test".to_string(),
        Some("http://127.0.0.1:1/v1".to_string()),
        None,
    );

    let result = engine.transcribe(b"audio", "clip.wav").await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
}
