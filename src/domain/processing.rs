use bytes::Bytes;

use super::VoiceProviderKind;

pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// One upload plus the options controlling which pipeline stages run.
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    pub audio: Bytes,
    pub file_name: Option<String>,
    pub target_language: String,
    pub should_translate: bool,
    pub should_generate_audio: bool,
    pub voice_provider: VoiceProviderKind,
    pub voice_id: Option<String>,
}

impl ProcessingRequest {
    pub fn new(audio: Bytes, file_name: Option<String>) -> Self {
        Self {
            audio,
            file_name,
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            should_translate: true,
            should_generate_audio: true,
            voice_provider: VoiceProviderKind::ElevenLabs,
            voice_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub transcribed_text: String,
    /// Equals `transcribed_text` when translation was skipped or failed.
    pub translated_text: String,
    /// Present only when synthesis succeeded.
    pub audio_url: Option<String>,
}
