use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use echolingo::application::services::AudioProcessingService;
use echolingo::infrastructure::audio::{OpenAiWhisperEngine, SymphoniaAudioProbe};
use echolingo::infrastructure::observability::{TracingConfig, init_tracing};
use echolingo::infrastructure::storage::LocalAudioStore;
use echolingo::infrastructure::translation::TranslationProviderFactory;
use echolingo::infrastructure::voice::VoiceProviderFactory;
use echolingo::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    if let Err(e) = settings.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        return Err(e.into());
    }
    settings.log_summary();

    settings
        .storage
        .create_directories()
        .context("failed to create storage directories")?;

    let audio_store = Arc::new(LocalAudioStore::new(settings.storage.temp_dir.clone())?);
    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        Some(settings.openai.base_url.clone()),
        Some(settings.transcription.model.clone()),
    ));
    let translation_provider =
        TranslationProviderFactory::create(&settings.translation, &settings.openai)?;

    // The default provider must work; the others are attached when configured.
    VoiceProviderFactory::create(settings.voice.provider, &settings.voice)?;

    let mut processing_service = AudioProcessingService::new(
        transcription_engine,
        translation_provider,
        audio_store,
        Arc::new(SymphoniaAudioProbe),
    );
    for (kind, provider) in VoiceProviderFactory::create_available(&settings.voice) {
        processing_service = processing_service.with_voice_provider(kind, provider);
    }

    tracing::info!(
        translation_provider = processing_service.translation_provider_name(),
        voice_providers = ?processing_service.available_voice_providers(),
        "Audio processing service ready"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server host or port")?;

    let router = create_router(AppState::new(processing_service, settings));

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
