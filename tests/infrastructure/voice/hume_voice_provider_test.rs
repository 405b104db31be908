use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use echolingo::application::ports::{SynthesisError, VoiceProvider};
use echolingo::domain::ConfigurationError;
use echolingo::infrastructure::voice::HumeVoiceProvider;
use echolingo::presentation::config::HumeSettings;

use crate::helpers::start_mock_server;

fn hume_server(
    status: StatusCode,
    audio: &'static [u8],
) -> (Router, Arc<Mutex<Option<(Option<String>, Value)>>>) {
    let captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v0/tts/file",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                let api_key = headers
                    .get("x-hume-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *sink.lock().unwrap() = Some((api_key, body));
                (status, audio).into_response()
            }
        }),
    );

    (app, captured)
}

fn settings(base_url: &str) -> HumeSettings {
    HumeSettings {
        api_key: "hume-test".to_string(),
        base_url: base_url.to_string(),
        ..HumeSettings::default()
    }
}

#[tokio::test]
async fn given_text_when_synthesizing_then_sends_utterance_with_configured_voice() {
    let (app, captured) = hume_server(StatusCode::OK, b"hume mp3");
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let provider = HumeVoiceProvider::new(&settings(&base_url));

    let audio = provider.synthesize("Good morning", None).await.unwrap();

    assert_eq!(&audio[..], b"hume mp3");
    let (api_key, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(api_key.as_deref(), Some("hume-test"));
    assert_eq!(body["utterances"][0]["text"], "Good morning");
    assert_eq!(
        body["utterances"][0]["voice"]["id"],
        "30edfa2e-7d75-45fb-8ccf-e280941393ee"
    );
    assert_eq!(body["format"]["type"], "mp3");
    assert_eq!(body["num_generations"], 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_voice_override_when_synthesizing_then_uses_requested_voice() {
    let (app, captured) = hume_server(StatusCode::OK, b"hume mp3");
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let provider = HumeVoiceProvider::new(&settings(&base_url));

    provider.synthesize("Hi", Some("other-voice")).await.unwrap();

    let (_, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["utterances"][0]["voice"]["id"], "other-voice");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_vendor_error_when_synthesizing_then_returns_api_request_failed() {
    let (app, _captured) = hume_server(StatusCode::BAD_REQUEST, b"bad voice");
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let provider = HumeVoiceProvider::new(&settings(&base_url));

    let result = provider.synthesize("Hi", None).await;

    assert!(matches!(result, Err(SynthesisError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_missing_api_key_when_validating_then_reports_missing_key() {
    let provider = HumeVoiceProvider::new(&HumeSettings::default());

    assert_eq!(
        provider.validate_configuration(),
        Err(ConfigurationError::MissingSetting {
            setting: "HUME_API_KEY",
            provider: "hume",
        })
    );
}

#[test]
fn given_complete_settings_when_validating_then_succeeds() {
    let provider = HumeVoiceProvider::new(&settings("http://localhost"));

    assert!(provider.validate_configuration().is_ok());
    assert_eq!(provider.provider_name(), "hume");
}
