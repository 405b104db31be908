use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new("Mock transcript")
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}

pub struct FailingTranscriptionEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed(
            "mock transcription failure".to_string(),
        ))
    }
}
