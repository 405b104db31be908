mod audio;
mod audio_file;
mod error;
mod health;
mod root;

pub use audio::{AudioResponse, ProcessAudioQuery, process_audio_handler};
pub use audio_file::get_audio_handler;
pub use error::{ErrorResponse, error_response};
pub use health::health_handler;
pub use root::{favicon_handler, root_handler};
