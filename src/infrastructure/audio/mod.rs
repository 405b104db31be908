mod mock_transcription_engine;
mod openai_whisper_engine;
mod symphonia_audio_probe;

pub use mock_transcription_engine::{FailingTranscriptionEngine, MockTranscriptionEngine};
pub use openai_whisper_engine::{DEFAULT_OPENAI_BASE_URL, DEFAULT_WHISPER_MODEL, OpenAiWhisperEngine};
pub use symphonia_audio_probe::SymphoniaAudioProbe;
