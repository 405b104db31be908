use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use futures::StreamExt;

use crate::application::ports::{
    AudioProbe, AudioProbeError, AudioStore, AudioStoreError, SynthesisError, TranscriptionEngine,
    TranscriptionError, TranslationProvider, VoiceProvider,
};
use crate::domain::{
    AudioFileName, ProcessingRequest, ProcessingResult, StoragePath, VoiceProviderKind,
};
use crate::infrastructure::observability::sanitize_for_log;

const OUTPUT_EXTENSION: &str = "mp3";

/// Runs upload, transcription, translation and synthesis in sequence.
///
/// Only the upload and transcription stages can fail a request; translation
/// falls back to the transcript and synthesis failures drop the audio URL.
pub struct AudioProcessingService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    translation_provider: Arc<dyn TranslationProvider>,
    voice_providers: HashMap<VoiceProviderKind, Arc<dyn VoiceProvider>>,
    audio_store: Arc<dyn AudioStore>,
    audio_probe: Arc<dyn AudioProbe>,
}

impl AudioProcessingService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        translation_provider: Arc<dyn TranslationProvider>,
        audio_store: Arc<dyn AudioStore>,
        audio_probe: Arc<dyn AudioProbe>,
    ) -> Self {
        Self {
            transcription_engine,
            translation_provider,
            voice_providers: HashMap::new(),
            audio_store,
            audio_probe,
        }
    }

    pub fn with_voice_provider(
        mut self,
        kind: VoiceProviderKind,
        provider: Arc<dyn VoiceProvider>,
    ) -> Self {
        self.voice_providers.insert(kind, provider);
        self
    }

    pub fn translation_provider_name(&self) -> &'static str {
        self.translation_provider.provider_name()
    }

    pub fn available_voice_providers(&self) -> Vec<VoiceProviderKind> {
        VoiceProviderKind::ALL
            .into_iter()
            .filter(|kind| self.voice_providers.contains_key(kind))
            .collect()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            file_name = request.file_name.as_deref().unwrap_or("unknown"),
            target_language = %request.target_language,
            voice_provider = %request.voice_provider,
        )
    )]
    pub async fn process(
        &self,
        request: ProcessingRequest,
    ) -> Result<ProcessingResult, ProcessingError> {
        let started = Instant::now();

        if request.audio.is_empty() {
            tracing::warn!("Upload contained no audio data");
            return Err(ProcessingError::EmptyUpload);
        }

        let upload_name = AudioFileName::for_upload(request.file_name.as_deref());
        let step = Instant::now();
        let upload_path = self
            .save_upload(&upload_name, request.audio.clone())
            .await?;
        tracing::info!(
            path = %upload_path,
            bytes = request.audio.len(),
            elapsed_ms = step.elapsed().as_millis() as u64,
            "Upload saved"
        );

        let audio_length_secs = match self
            .probe_duration(request.audio.clone(), upload_name.as_str())
            .await
        {
            Ok(secs) => {
                tracing::info!(audio_length_secs = secs, "Audio length determined");
                Some(secs)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine audio length");
                None
            }
        };

        let step = Instant::now();
        let transcribed_text = self
            .transcription_engine
            .transcribe(&request.audio, upload_name.as_str())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Error transcribing audio"
                );
                ProcessingError::Transcription(e)
            })?;
        tracing::info!(
            chars = transcribed_text.len(),
            preview = %sanitize_for_log(&transcribed_text),
            elapsed_ms = step.elapsed().as_millis() as u64,
            "Transcription completed"
        );

        let translated_text = if request.should_translate {
            self.translate_or_fallback(&transcribed_text, &request.target_language)
                .await
        } else {
            tracing::info!("Translation skipped as per request");
            transcribed_text.clone()
        };

        let audio_url = if request.should_generate_audio {
            let step = Instant::now();
            match self
                .synthesize_to_store(
                    &translated_text,
                    request.voice_provider,
                    request.voice_id.as_deref(),
                )
                .await
            {
                Ok(name) => {
                    tracing::info!(
                        file = %name,
                        elapsed_ms = step.elapsed().as_millis() as u64,
                        "Speech generation completed"
                    );
                    Some(name.url())
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Error generating speech"
                    );
                    tracing::warn!("Continuing without audio due to speech generation failure");
                    None
                }
            }
        } else {
            tracing::info!("Speech generation skipped as per request");
            None
        };

        let total = started.elapsed();
        tracing::info!(
            elapsed_ms = total.as_millis() as u64,
            "Audio processing completed"
        );
        if let Some(length) = audio_length_secs.filter(|secs| *secs > 0.0) {
            tracing::info!(
                ratio = total.as_secs_f64() / length,
                "Processing time relative to audio length"
            );
        }

        Ok(ProcessingResult {
            transcribed_text,
            translated_text,
            audio_url,
        })
    }

    pub async fn fetch_audio(&self, name: &AudioFileName) -> Result<Bytes, AudioStoreError> {
        self.audio_store.fetch(&StoragePath::output(name)).await
    }

    async fn probe_duration(&self, audio: Bytes, file_name: &str) -> Result<f64, AudioProbeError> {
        let probe = Arc::clone(&self.audio_probe);
        let file_name = file_name.to_string();

        tokio::task::spawn_blocking(move || probe.duration_secs(audio, &file_name))
            .await
            .map_err(|e| AudioProbeError::UnknownDuration(format!("task join error: {e}")))?
    }

    async fn save_upload(
        &self,
        name: &AudioFileName,
        audio: Bytes,
    ) -> Result<StoragePath, ProcessingError> {
        let path = StoragePath::upload(name);
        let stream = futures::stream::once(async move { Ok::<_, io::Error>(audio) }).boxed();

        self.audio_store.store(&path, stream).await.map_err(|e| {
            tracing::error!(error = %e, path = %path, "Error saving uploaded file");
            ProcessingError::Upload(e)
        })?;

        Ok(path)
    }

    async fn translate_or_fallback(&self, text: &str, target_language: &str) -> String {
        let step = Instant::now();
        let provider = self.translation_provider.provider_name();
        tracing::info!(provider, target_language, "Translating text");

        match self
            .translation_provider
            .translate(text, target_language)
            .await
        {
            Ok(translated) => {
                tracing::info!(
                    provider,
                    chars = translated.len(),
                    preview = %sanitize_for_log(&translated),
                    elapsed_ms = step.elapsed().as_millis() as u64,
                    "Translation completed"
                );
                translated
            }
            Err(e) => {
                tracing::error!(provider, target_language, error = %e, "Error translating text");
                tracing::warn!("Using original text due to translation failure");
                text.to_string()
            }
        }
    }

    async fn synthesize_to_store(
        &self,
        text: &str,
        kind: VoiceProviderKind,
        voice_id: Option<&str>,
    ) -> Result<AudioFileName, SynthesisError> {
        let provider = self
            .voice_providers
            .get(&kind)
            .ok_or_else(|| SynthesisError::ProviderUnavailable(kind.to_string()))?;

        tracing::info!(
            provider = provider.provider_name(),
            voice_id = voice_id.unwrap_or("default"),
            chars = text.len(),
            "Generating speech"
        );

        let audio = provider.synthesize_stream(text, voice_id).await?;
        let name = AudioFileName::for_output(OUTPUT_EXTENSION);
        let path = StoragePath::output(&name);
        let byte_stream = audio.map(|chunk| chunk.map_err(io::Error::other)).boxed();

        let written = self
            .audio_store
            .store(&path, byte_stream)
            .await
            .map_err(|e| SynthesisError::Storage(e.to_string()))?;

        if written == 0 {
            if let Err(e) = self.audio_store.delete(&path).await {
                tracing::warn!(error = %e, path = %path, "Failed to remove empty audio file");
            }
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::debug!(path = %path, bytes = written, "Synthesized audio stored");
        Ok(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("no audio data uploaded")]
    EmptyUpload,
    #[error("error processing uploaded file: {0}")]
    Upload(#[source] AudioStoreError),
    #[error("error transcribing audio: {0}")]
    Transcription(#[source] TranscriptionError),
}

impl ProcessingError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyUpload | Self::Upload(_))
    }
}
