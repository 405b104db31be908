use crate::application::ports::{TranslationError, TranslationProvider};

/// Tags the text with the target language instead of translating it.
pub struct MockTranslationProvider;

#[async_trait::async_trait]
impl TranslationProvider for MockTranslationProvider {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        Ok(format!("[{}] {}", target_language, text))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

pub struct FailingTranslationProvider;

#[async_trait::async_trait]
impl TranslationProvider for FailingTranslationProvider {
    async fn translate(
        &self,
        _text: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::ApiRequestFailed(
            "mock translation failure".to_string(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
