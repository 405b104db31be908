use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;

use crate::application::ports::{AudioByteStream, SynthesisError, VoiceProvider};
use crate::domain::{ConfigurationError, is_unset_credential};
use crate::presentation::config::HumeSettings;

pub struct HumeVoiceProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    default_voice_id: String,
}

impl HumeVoiceProvider {
    pub fn new(settings: &HumeSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            default_voice_id: settings.voice_id.clone(),
        }
    }
}

#[async_trait]
impl VoiceProvider for HumeVoiceProvider {
    async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioByteStream, SynthesisError> {
        let voice_id = voice_id.unwrap_or(self.default_voice_id.as_str());

        let body = json!({
            "utterances": [
                { "text": text, "voice": { "id": voice_id } }
            ],
            "format": { "type": "mp3" },
            "num_generations": 1,
        });

        tracing::debug!(voice_id, "Requesting Hume speech synthesis");

        let response = self
            .client
            .post(format!("{}/v0/tts/file", self.base_url))
            .header("X-Hume-Api-Key", &self.api_key)
            .json(&body)
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
        "hume"
    }

    fn validate_configuration(&self) -> Result<(), ConfigurationError> {
        if is_unset_credential(&self.api_key) {
            return Err(ConfigurationError::MissingSetting {
                setting: "HUME_API_KEY",
                provider: "hume",
            });
        }
        if self.default_voice_id.trim().is_empty() {
            return Err(ConfigurationError::MissingSetting {
                setting: "voice.hume.voice_id",
                provider: "hume",
            });
        }
        Ok(())
    }
}
