use std::io::Cursor;
use std::path::Path;

use bytes::Bytes;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioProbe, AudioProbeError};

/// Reads duration from container headers without decoding any packets.
pub struct SymphoniaAudioProbe;

impl AudioProbe for SymphoniaAudioProbe {
    fn duration_secs(&self, audio: Bytes, file_name: &str) -> Result<f64, AudioProbeError> {
        let cursor = Cursor::new(audio);
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioProbeError::UnsupportedFormat(e.to_string()))?;

        let format = probed.format;
        let track = format.default_track().ok_or(AudioProbeError::NoTrack)?;
        let params = &track.codec_params;

        let frames = params
            .n_frames
            .ok_or_else(|| AudioProbeError::UnknownDuration("frame count missing".to_string()))?;

        if let Some(time_base) = params.time_base {
            let time = time_base.calc_time(frames);
            return Ok(time.seconds as f64 + time.frac);
        }

        let sample_rate = params
            .sample_rate
            .filter(|rate| *rate > 0)
            .ok_or_else(|| AudioProbeError::UnknownDuration("sample rate missing".to_string()))?;

        Ok(frames as f64 / sample_rate as f64)
    }
}
