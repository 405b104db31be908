use async_trait::async_trait;

use crate::application::ports::{TranslationError, TranslationProvider};

use super::chat_completion_client::ChatCompletionClient;
use super::prompt::translation_system_prompt;

/// SambaNova exposes an OpenAI-compatible chat API under its own base URL.
pub struct SambaNovaTranslationProvider {
    client: ChatCompletionClient,
}

impl SambaNovaTranslationProvider {
    pub fn new(base_url: &str, api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: ChatCompletionClient::new(base_url, api_key, model, temperature),
        }
    }
}

#[async_trait]
impl TranslationProvider for SambaNovaTranslationProvider {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        tracing::debug!(
            model = self.client.model(),
            chars = text.len(),
            target_language,
            "Translating text with SambaNova"
        );

        let translated = self
            .client
            .complete(&translation_system_prompt(target_language), text)
            .await?;

        tracing::info!(chars = translated.len(), "SambaNova translation completed");
        Ok(translated)
    }

    fn provider_name(&self) -> &'static str {
        "sambanova"
    }
}
