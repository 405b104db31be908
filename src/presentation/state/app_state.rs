use std::sync::Arc;

use crate::application::services::AudioProcessingService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub processing_service: Arc<AudioProcessingService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(processing_service: AudioProcessingService, settings: Settings) -> Self {
        Self {
            processing_service: Arc::new(processing_service),
            settings: Arc::new(settings),
        }
    }
}
