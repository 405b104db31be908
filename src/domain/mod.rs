mod audio_file_name;
mod configuration_error;
mod credential;
mod processing;
mod provider_kind;
mod storage_path;

pub use audio_file_name::{AUDIO_ROUTE_PREFIX, AudioFileName};
pub use configuration_error::ConfigurationError;
pub use credential::is_unset_credential;
pub use processing::{DEFAULT_TARGET_LANGUAGE, ProcessingRequest, ProcessingResult};
pub use provider_kind::{TranslationProviderKind, VoiceProviderKind};
pub use storage_path::{OUTPUT_DIR, StoragePath, UPLOAD_DIR};
