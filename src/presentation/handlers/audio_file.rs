use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::AudioStoreError;
use crate::domain::AudioFileName;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

const NOT_FOUND_DETAIL: &str = "Audio file not found";

pub async fn get_audio_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let Some(name) = AudioFileName::parse(&filename) else {
        tracing::warn!(filename = %filename, "Rejected audio file name");
        return error_response(StatusCode::NOT_FOUND, NOT_FOUND_DETAIL);
    };

    match state.processing_service.fetch_audio(&name).await {
        Ok(bytes) => {
            let content_type = mime_guess::from_path(name.as_str())
                .first_or_octet_stream()
                .to_string();
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(AudioStoreError::NotFound(_)) => {
            tracing::debug!(filename = %name, "Audio file not found");
            error_response(StatusCode::NOT_FOUND, NOT_FOUND_DETAIL)
        }
        Err(e) => {
            tracing::error!(filename = %name, error = %e, "Failed to read audio file");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading audio file: {}", e),
            )
        }
    }
}
