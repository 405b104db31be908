mod elevenlabs_voice_provider;
mod hume_voice_provider;
mod mock_voice_provider;
mod voice_provider_factory;

pub use elevenlabs_voice_provider::ElevenLabsVoiceProvider;
pub use hume_voice_provider::HumeVoiceProvider;
pub use mock_voice_provider::{FailingVoiceProvider, MockVoiceProvider};
pub use voice_provider_factory::VoiceProviderFactory;
