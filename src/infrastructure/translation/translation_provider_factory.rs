use std::sync::Arc;

use crate::application::ports::TranslationProvider;
use crate::domain::{ConfigurationError, TranslationProviderKind, is_unset_credential};
use crate::presentation::config::{OpenAiSettings, TranslationSettings};

use super::openai_translation_provider::OpenAiTranslationProvider;
use super::sambanova_translation_provider::SambaNovaTranslationProvider;

pub struct TranslationProviderFactory;

impl TranslationProviderFactory {
    pub fn create(
        settings: &TranslationSettings,
        openai: &OpenAiSettings,
    ) -> Result<Arc<dyn TranslationProvider>, ConfigurationError> {
        tracing::info!(provider = %settings.provider, "Creating translation provider");

        match settings.provider {
            TranslationProviderKind::OpenAi => {
                if is_unset_credential(&openai.api_key) {
                    return Err(ConfigurationError::MissingSetting {
                        setting: "OPENAI_API_KEY",
                        provider: "openai",
                    });
                }
                Ok(Arc::new(OpenAiTranslationProvider::new(
                    &openai.base_url,
                    openai.api_key.clone(),
                    settings.model.clone(),
                    settings.temperature,
                )))
            }
            TranslationProviderKind::SambaNova => {
                let sambanova = &settings.sambanova;
                if is_unset_credential(&sambanova.api_key) {
                    return Err(ConfigurationError::MissingSetting {
                        setting: "SAMBANOVA_API_KEY",
                        provider: "sambanova",
                    });
                }
                Ok(Arc::new(SambaNovaTranslationProvider::new(
                    &sambanova.base_url,
                    sambanova.api_key.clone(),
                    sambanova.model.clone(),
                    settings.temperature,
                )))
            }
        }
    }
}
