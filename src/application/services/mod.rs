mod audio_processing_service;

pub use audio_processing_service::{AudioProcessingService, ProcessingError};
