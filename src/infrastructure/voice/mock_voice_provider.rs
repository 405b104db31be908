use bytes::Bytes;
use futures::StreamExt;

use crate::application::ports::{AudioByteStream, SynthesisError, VoiceProvider};
use crate::domain::ConfigurationError;

/// Streams a fixed sequence of audio chunks.
pub struct MockVoiceProvider {
    chunks: Vec<Bytes>,
}

impl MockVoiceProvider {
    pub fn new(chunks: Vec<Bytes>) -> Self {
        Self { chunks }
    }
}

impl Default for MockVoiceProvider {
    fn default() -> Self {
        Self::new(vec![Bytes::from_static(b"mock-audio")])
    }
}

#[async_trait::async_trait]
impl VoiceProvider for MockVoiceProvider {
    async fn synthesize_stream(
        &self,
        _text: &str,
        _voice_id: Option<&str>,
    ) -> Result<AudioByteStream, SynthesisError> {
        let chunks: Vec<Result<Bytes, SynthesisError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        Ok(futures::stream::iter(chunks).boxed())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn validate_configuration(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

pub struct FailingVoiceProvider;

#[async_trait::async_trait]
impl VoiceProvider for FailingVoiceProvider {
    async fn synthesize_stream(
        &self,
        _text: &str,
        _voice_id: Option<&str>,
    ) -> Result<AudioByteStream, SynthesisError> {
        Err(SynthesisError::ApiRequestFailed(
            "mock synthesis failure".to_string(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn validate_configuration(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}
