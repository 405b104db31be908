use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::VoiceProvider;
use crate::domain::{ConfigurationError, VoiceProviderKind};
use crate::presentation::config::VoiceSettings;

use super::elevenlabs_voice_provider::ElevenLabsVoiceProvider;
use super::hume_voice_provider::HumeVoiceProvider;

pub struct VoiceProviderFactory;

impl VoiceProviderFactory {
    /// Builds the provider and rejects it unless its configuration validates.
    pub fn create(
        kind: VoiceProviderKind,
        settings: &VoiceSettings,
    ) -> Result<Arc<dyn VoiceProvider>, ConfigurationError> {
        let provider: Arc<dyn VoiceProvider> = match kind {
            VoiceProviderKind::ElevenLabs => {
                Arc::new(ElevenLabsVoiceProvider::new(&settings.elevenlabs))
            }
            VoiceProviderKind::Hume => Arc::new(HumeVoiceProvider::new(&settings.hume)),
        };

        provider.validate_configuration()?;

        tracing::info!(
            provider = provider.provider_name(),
            "Voice provider created and validated"
        );
        Ok(provider)
    }

    /// Every provider whose configuration is complete, keyed by kind.
    pub fn create_available(
        settings: &VoiceSettings,
    ) -> HashMap<VoiceProviderKind, Arc<dyn VoiceProvider>> {
        VoiceProviderKind::ALL
            .into_iter()
            .filter_map(|kind| match Self::create(kind, settings) {
                Ok(provider) => Some((kind, provider)),
                Err(e) => {
                    tracing::warn!(provider = %kind, error = %e, "Voice provider unavailable");
                    None
                }
            })
            .collect()
    }
}
