use async_trait::async_trait;

use crate::application::ports::{TranslationError, TranslationProvider};

use super::chat_completion_client::ChatCompletionClient;
use super::prompt::translation_system_prompt;

pub struct OpenAiTranslationProvider {
    client: ChatCompletionClient,
}

impl OpenAiTranslationProvider {
    pub fn new(base_url: &str, api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: ChatCompletionClient::new(base_url, api_key, model, temperature),
        }
    }
}

#[async_trait]
impl TranslationProvider for OpenAiTranslationProvider {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        tracing::debug!(
            model = self.client.model(),
            chars = text.len(),
            target_language,
            "Translating text with OpenAI"
        );

        let translated = self
            .client
            .complete(&translation_system_prompt(target_language), text)
            .await?;

        tracing::info!(chars = translated.len(), "OpenAI translation completed");
        Ok(translated)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
