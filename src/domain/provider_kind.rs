use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TranslationProviderKind {
    OpenAi,
    SambaNova,
}

impl TranslationProviderKind {
    const SUPPORTED: &'static str = "openai, sambanova";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::SambaNova => "sambanova",
        }
    }
}

impl FromStr for TranslationProviderKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "sambanova" => Ok(Self::SambaNova),
            other => Err(ConfigurationError::UnsupportedProvider {
                capability: "translation",
                name: other.to_string(),
                supported: Self::SUPPORTED,
            }),
        }
    }
}

impl TryFrom<String> for TranslationProviderKind {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for TranslationProviderKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for TranslationProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum VoiceProviderKind {
    ElevenLabs,
    Hume,
}

impl VoiceProviderKind {
    pub const ALL: [VoiceProviderKind; 2] = [Self::ElevenLabs, Self::Hume];

    const SUPPORTED: &'static str = "elevenlabs, hume";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElevenLabs => "elevenlabs",
            Self::Hume => "hume",
        }
    }
}

impl FromStr for VoiceProviderKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elevenlabs" => Ok(Self::ElevenLabs),
            "hume" => Ok(Self::Hume),
            other => Err(ConfigurationError::UnsupportedProvider {
                capability: "voice",
                name: other.to_string(),
                supported: Self::SUPPORTED,
            }),
        }
    }
}

impl TryFrom<String> for VoiceProviderKind {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for VoiceProviderKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for VoiceProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
