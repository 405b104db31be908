mod chat_completion_client;
mod mock_translation_provider;
mod openai_translation_provider;
mod prompt;
mod sambanova_translation_provider;
mod translation_provider_factory;

pub use chat_completion_client::ChatCompletionClient;
pub use mock_translation_provider::{FailingTranslationProvider, MockTranslationProvider};
pub use openai_translation_provider::OpenAiTranslationProvider;
pub use prompt::translation_system_prompt;
pub use sambanova_translation_provider::SambaNovaTranslationProvider;
pub use translation_provider_factory::TranslationProviderFactory;
