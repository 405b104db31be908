use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::Serialize;

use crate::application::ports::{AudioByteStream, SynthesisError, VoiceProvider};
use crate::domain::{ConfigurationError, is_unset_credential};
use crate::presentation::config::ElevenLabsSettings;

pub struct ElevenLabsVoiceProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    default_voice_id: String,
    model_id: String,
    output_format: String,
}

#[derive(Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsVoiceProvider {
    pub fn new(settings: &ElevenLabsSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            default_voice_id: settings.default_voice_id.clone(),
            model_id: settings.model_id.clone(),
            output_format: settings.output_format.clone(),
        }
    }

    /// `{base}/v1/text-to-speech/{voice_id}` with the id as a single encoded segment.
    fn text_to_speech_url(&self, voice_id: &str) -> Result<Url, SynthesisError> {
        if !is_valid_voice_id(voice_id) {
            tracing::warn!(voice_id, "Rejected ElevenLabs voice id");
            return Err(SynthesisError::InvalidVoiceId(voice_id.to_string()));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                SynthesisError::ApiRequestFailed(format!(
                    "base url: {} cannot be a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v1", "text-to-speech", voice_id]);
        Ok(url)
    }
}

fn is_valid_voice_id(voice_id: &str) -> bool {
    !voice_id.is_empty()
        && voice_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

#[async_trait]
impl VoiceProvider for ElevenLabsVoiceProvider {
    async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioByteStream, SynthesisError> {
        let voice_id = voice_id.unwrap_or(self.default_voice_id.as_str());
        let url = self.text_to_speech_url(voice_id)?;

        tracing::debug!(
            voice_id,
            model_id = %self.model_id,
            output_format = %self.output_format,
            "Requesting ElevenLabs speech synthesis"
        );

        let response = self
            .client
            .post(url)
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&TextToSpeechRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| SynthesisError::StreamInterrupted(e.to_string())))
            .boxed())
    }

    fn provider_name(&self) -> &'static str {
        "elevenlabs"
    }

    fn validate_configuration(&self) -> Result<(), ConfigurationError> {
        let missing = if is_unset_credential(&self.api_key) {
            Some("ELEVENLABS_API_KEY")
        } else if self.default_voice_id.trim().is_empty() {
            Some("voice.elevenlabs.default_voice_id")
        } else if self.model_id.trim().is_empty() {
            Some("voice.elevenlabs.model_id")
        } else {
            None
        };

        match missing {
            Some(setting) => Err(ConfigurationError::MissingSetting {
                setting,
                provider: "elevenlabs",
            }),
            None => Ok(()),
        }
    }
}
