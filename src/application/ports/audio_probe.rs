use bytes::Bytes;

/// Reads container metadata to estimate playback length.
///
/// Blocking; callers on the async runtime run it on the blocking pool.
pub trait AudioProbe: Send + Sync {
    fn duration_secs(&self, audio: Bytes, file_name: &str) -> Result<f64, AudioProbeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioProbeError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("no audio track found")]
    NoTrack,
    #[error("duration unknown: {0}")]
    UnknownDuration(String),
}
