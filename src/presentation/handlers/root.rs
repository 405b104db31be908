use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::state::AppState;

const FAVICON_FILE: &str = "favicon.ico";

#[derive(Serialize)]
pub struct AppInfoResponse {
    pub app_name: String,
    pub version: String,
    pub description: String,
}

pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let app = &state.settings.app;
    Json(AppInfoResponse {
        app_name: app.name.clone(),
        version: app.version.clone(),
        description: app.description.clone(),
    })
}

/// Serves `favicon.ico` from the static directory, or 204 when there is none.
pub async fn favicon_handler(State(state): State<AppState>) -> Response {
    let path = state.settings.storage.static_dir.join(FAVICON_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/x-icon")], bytes).into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
