use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::application::services::ProcessingError;
use crate::domain::{DEFAULT_TARGET_LANGUAGE, ProcessingRequest, VoiceProviderKind};
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ProcessAudioQuery {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_true")]
    pub should_translate: bool,
    #[serde(default = "default_true")]
    pub should_generate_audio: bool,
    /// Kept as a string so an unknown name is reported with the supported set.
    #[serde(default = "default_voice_provider")]
    pub voice_provider: String,
    pub voice_id: Option<String>,
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_voice_provider() -> String {
    VoiceProviderKind::ElevenLabs.as_str().to_string()
}

#[derive(Debug, Serialize)]
pub struct AudioResponse {
    pub transcribed_text: String,
    pub translated_text: String,
    pub audio_url: Option<String>,
}

struct Upload {
    file_name: Option<String>,
    data: Bytes,
}

#[tracing::instrument(skip(state, query, multipart), fields(target_language = %query.target_language))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    Query(query): Query<ProcessAudioQuery>,
    multipart: Multipart,
) -> Response {
    let voice_provider: VoiceProviderKind = match query.voice_provider.parse() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(voice_provider = %query.voice_provider, "Unsupported voice provider requested");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let request = ProcessingRequest {
        audio: upload.data,
        file_name: upload.file_name,
        target_language: query.target_language,
        should_translate: query.should_translate,
        should_generate_audio: query.should_generate_audio,
        voice_provider,
        voice_id: query.voice_id.filter(|id| !id.trim().is_empty()),
    };

    match state.processing_service.process(request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AudioResponse {
                transcribed_text: result.transcribed_text,
                translated_text: result.translated_text,
                audio_url: result.audio_url,
            }),
        )
            .into_response(),
        Err(e) => processing_error_response(&e),
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Process request with no file");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "No file uploaded",
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(multipart_error_response(e));
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file data");
            multipart_error_response(e)
        })?;

        tracing::debug!(
            file_name = file_name.as_deref().unwrap_or("unknown"),
            bytes = data.len(),
            "Received audio upload"
        );
        return Ok(Upload { file_name, data });
    }
}

/// Keeps the rejection status, so an upload over the body limit is a 413.
fn multipart_error_response(error: MultipartError) -> Response {
    let status = error.status();
    let detail = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "Uploaded file exceeds the maximum allowed size".to_string()
    } else {
        format!("Error processing uploaded file: {}", error.body_text())
    };
    error_response(status, detail)
}

fn processing_error_response(error: &ProcessingError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, capitalize(&error.to_string()))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
