mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AppSettings, CorsSettings, ElevenLabsSettings, HumeSettings, LoggingSettings,
    OpenAiSettings, SambaNovaSettings, ServerSettings, Settings, StorageSettings,
    TranscriptionSettings, TranslationSettings, VoiceSettings, mask_secret,
};
