use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::domain::ConfigurationError;

pub type AudioByteStream = BoxStream<'static, Result<Bytes, SynthesisError>>;

#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Starts synthesis and yields audio chunks as the vendor sends them.
    ///
    /// `voice_id` falls back to the provider's configured default.
    async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioByteStream, SynthesisError>;

    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> Result<Bytes, SynthesisError> {
        let mut stream = self.synthesize_stream(text, voice_id).await?;
        let mut audio = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            audio.extend_from_slice(&chunk?);
        }
        Ok(audio.freeze())
    }

    fn provider_name(&self) -> &'static str;

    fn validate_configuration(&self) -> Result<(), ConfigurationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("audio stream interrupted: {0}")]
    StreamInterrupted(String),
    #[error("invalid voice id: {0}")]
    InvalidVoiceId(String),
    #[error("voice provider not available: {0}")]
    ProviderUnavailable(String),
    #[error("provider returned no audio")]
    EmptyAudio,
    #[error("failed to store audio: {0}")]
    Storage(String),
}
