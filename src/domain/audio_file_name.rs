use std::fmt;

use chrono::Local;
use uuid::Uuid;

pub const AUDIO_ROUTE_PREFIX: &str = "/api/audio";

const ACCEPTED_UPLOAD_EXTENSIONS: [&str; 3] = [".mp3", ".wav", ".m4a"];
const DEFAULT_UPLOAD_NAME: &str = "audio.wav";
const UNIQUE_ID_LEN: usize = 8;

/// A flat file name for an uploaded or generated audio file.
///
/// Generated names start with a minute-resolution timestamp followed by eight
/// hex characters of a random uuid, so concurrent requests never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioFileName(String);

impl AudioFileName {
    /// Builds the stored name for an upload, keeping the client's base name.
    ///
    /// Names without an `.mp3`, `.wav` or `.m4a` suffix get `.wav` appended.
    pub fn for_upload(original: Option<&str>) -> Self {
        let base = original
            .map(|name| sanitize(strip_directories(name)))
            .filter(|name| !name.is_empty() && name.chars().any(|c| c != '.'))
            .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

        let base = if ACCEPTED_UPLOAD_EXTENSIONS
            .iter()
            .any(|ext| base.to_lowercase().ends_with(ext))
        {
            base
        } else {
            format!("{}.wav", base)
        };

        Self(format!("{}_{}", unique_prefix(), base))
    }

    pub fn for_output(extension: &str) -> Self {
        Self(format!(
            "{}.{}",
            unique_prefix(),
            extension.trim_start_matches('.')
        ))
    }

    /// Accepts a client-supplied name only if it cannot escape the output directory.
    pub fn parse(raw: &str) -> Option<Self> {
        let invalid = raw.is_empty()
            || raw.starts_with('.')
            || raw.contains("..")
            || raw.contains('/')
            || raw.contains('\\')
            || raw.chars().any(|c| c.is_control());

        if invalid {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Retrieval URL served by the audio file route.
    pub fn url(&self) -> String {
        format!("{}/{}", AUDIO_ROUTE_PREFIX, self.0)
    }
}

impl fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn unique_prefix() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M");
    let id = Uuid::new_v4().simple().to_string();
    format!("{}_{}", timestamp, &id[..UNIQUE_ID_LEN])
}

fn strip_directories(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
