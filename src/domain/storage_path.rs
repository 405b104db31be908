use std::fmt;

use super::AudioFileName;

pub const UPLOAD_DIR: &str = "input";
pub const OUTPUT_DIR: &str = "output";

/// Location of an audio file relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn upload(name: &AudioFileName) -> Self {
        Self(format!("{}/{}", UPLOAD_DIR, name))
    }

    pub fn output(name: &AudioFileName) -> Self {
        Self(format!("{}/{}", OUTPUT_DIR, name))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
