mod audio_probe;
mod audio_store;
mod transcription_engine;
mod translation_provider;
mod voice_provider;

pub use audio_probe::{AudioProbe, AudioProbeError};
pub use audio_store::{AudioStore, AudioStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_provider::{TranslationError, TranslationProvider};
pub use voice_provider::{AudioByteStream, SynthesisError, VoiceProvider};
