use std::sync::{Arc, Mutex};

use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use echolingo::application::ports::TranslationProvider;
use echolingo::infrastructure::translation::{
    OpenAiTranslationProvider, SambaNovaTranslationProvider, translation_system_prompt,
};

use crate::helpers::start_mock_server;

fn echo_model_server() -> (Router, Arc<Mutex<Vec<Value>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requests);

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(request): Json<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                let model = request["model"].as_str().unwrap_or_default().to_string();
                sink.lock().unwrap().push(request);
                Json(json!({
                    "choices": [{ "message": { "content": format!("translated by {}", model) } }]
                }))
            }
        }),
    );

    (app, requests)
}

#[test]
fn given_target_language_when_building_prompt_then_names_language_and_asks_for_text_only() {
    let prompt = translation_system_prompt("Spanish");

    assert_eq!(
        prompt,
        "You are a translation assistant. Translate the following text into Spanish. \
         Provide only the translated text without any explanations or additional content."
    );
}

#[tokio::test]
async fn given_openai_provider_when_translating_then_uses_configured_model_and_prompt() {
    let (app, requests) = echo_model_server();
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let provider = OpenAiTranslationProvider::new(
        &format!("{}/v1", base_url),
        "sk-test".to_string(),
        "gpt-4o-mini".to_string(),
        0.3,
    );

    let result = provider.translate("Hola mundo", "English").await.unwrap();

    assert_eq!(result, "translated by gpt-4o-mini");
    assert_eq!(provider.provider_name(), "openai");
    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0]["messages"][0]["content"],
        translation_system_prompt("English")
    );
    assert_eq!(requests[0]["messages"][1]["content"], "Hola mundo");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_sambanova_provider_when_translating_then_uses_its_model() {
    let (app, _requests) = echo_model_server();
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let provider = SambaNovaTranslationProvider::new(
        &format!("{}/v1", base_url),
        "sn-test".to_string(),
        "Meta-Llama-3.1-8B-Instruct".to_string(),
        0.3,
    );

    let result = provider.translate("Bonjour", "English").await.unwrap();

    assert_eq!(result, "translated by Meta-Llama-3.1-8B-Instruct");
    assert_eq!(provider.provider_name(), "sambanova");
    shutdown_tx.send(()).ok();
}
