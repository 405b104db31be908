use std::path::PathBuf;

use ::config::Environment as EnvironmentSource;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use super::Environment;
use crate::domain::{
    ConfigurationError, TranslationProviderKind, VoiceProviderKind, is_unset_credential,
};

const VALID_LOG_LEVELS: [&str; 7] = [
    "trace", "debug", "info", "warn", "warning", "error", "critical",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub openai: OpenAiSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub voice: VoiceSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "EchoLingo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description:
                "API for transcribing, translating, and generating speech from audio files"
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Root for `input/` uploads and `output/` synthesized audio.
    pub temp_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_size_bytes: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from("temp"),
            static_dir: PathBuf::from("static"),
            max_upload_size_bytes: 100 * 1024 * 1024,
        }
    }
}

impl StorageSettings {
    pub fn create_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.temp_dir.join(crate::domain::UPLOAD_DIR))?;
        std::fs::create_dir_all(self.temp_dir.join(crate::domain::OUTPUT_DIR))?;
        std::fs::create_dir_all(&self.static_dir)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl LoggingSettings {
    /// Maps the level names accepted in configuration onto `tracing` directives.
    pub fn filter_level(&self) -> &'static str {
        match self.level.trim().to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" | "critical" => "error",
            _ => "info",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptionSettings {
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationSettings {
    pub provider: TranslationProviderKind,
    /// Chat model used by the OpenAI provider.
    pub model: String,
    pub temperature: f32,
    pub sambanova: SambaNovaSettings,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: TranslationProviderKind::OpenAi,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            sambanova: SambaNovaSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SambaNovaSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Default for SambaNovaSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.sambanova.ai/v1".to_string(),
            model: "Meta-Llama-3.1-8B-Instruct".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoiceSettings {
    /// Provider that must be fully configured for the server to start.
    pub provider: VoiceProviderKind,
    pub elevenlabs: ElevenLabsSettings,
    pub hume: HumeSettings,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            provider: VoiceProviderKind::Hume,
            elevenlabs: ElevenLabsSettings::default(),
            hume: HumeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: String,
    pub default_voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

impl Default for ElevenLabsSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.elevenlabs.io".to_string(),
            default_voice_id: "o47F6fLSHEFdPzySrC5z".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            output_format: "mp3_44100_128".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HumeSettings {
    pub api_key: String,
    pub base_url: String,
    pub voice_id: String,
}

impl Default for HumeSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.hume.ai".to_string(),
            voice_id: "30edfa2e-7d75-45fb-8ccf-e280941393ee".to_string(),
        }
    }
}

impl Settings {
    /// Layers defaults, `appsettings.{env}`, `APP_*` variables and the
    /// conventional vendor key variables, in increasing precedence.
    pub fn load(environment: Environment) -> Result<Self, ConfigurationError> {
        let defaults = Config::try_from(&Settings::default()).map_err(load_error)?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("openai.api_key", std::env::var("OPENAI_API_KEY").ok())
            .map_err(load_error)?
            .set_override_option(
                "translation.sambanova.api_key",
                std::env::var("SAMBANOVA_API_KEY").ok(),
            )
            .map_err(load_error)?
            .set_override_option(
                "voice.elevenlabs.api_key",
                std::env::var("ELEVENLABS_API_KEY").ok(),
            )
            .map_err(load_error)?
            .set_override_option("voice.hume.api_key", std::env::var("HUME_API_KEY").ok())
            .map_err(load_error)?
            .build()
            .map_err(load_error)?;

        config.try_deserialize().map_err(load_error)
    }

    /// Checks cross-field requirements and reports every problem at once.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut problems = Vec::new();

        let openai_key = self.openai.api_key.trim();
        if is_unset_credential(openai_key) {
            problems.push("OPENAI_API_KEY is required".to_string());
        } else if !openai_key.starts_with("sk-") {
            problems.push("OPENAI_API_KEY should start with 'sk-'".to_string());
        }

        let (voice_key, voice_key_name) = match self.voice.provider {
            VoiceProviderKind::ElevenLabs => (&self.voice.elevenlabs.api_key, "ELEVENLABS_API_KEY"),
            VoiceProviderKind::Hume => (&self.voice.hume.api_key, "HUME_API_KEY"),
        };
        if is_unset_credential(voice_key) {
            problems.push(format!(
                "{} is required when using the {} provider",
                voice_key_name, self.voice.provider
            ));
        }

        if self.translation.provider == TranslationProviderKind::SambaNova
            && is_unset_credential(&self.translation.sambanova.api_key)
        {
            problems.push(
                "SAMBANOVA_API_KEY is required when using the sambanova provider".to_string(),
            );
        }

        let level = self.logging.level.trim().to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            problems.push(format!(
                "invalid log level: {}. Must be one of {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::Invalid(problems.join("; ")))
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            app = %self.app.name,
            version = %self.app.version,
            openai_api_key = %mask_secret(&self.openai.api_key),
            translation_provider = %self.translation.provider,
            voice_provider = %self.voice.provider,
            elevenlabs_api_key = %mask_secret(&self.voice.elevenlabs.api_key),
            hume_api_key = %mask_secret(&self.voice.hume.api_key),
            hume_voice_id = %self.voice.hume.voice_id,
            log_level = %self.logging.level,
            "Configuration loaded and validated"
        );
    }
}

/// Keeps only the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("********{}", tail)
}

fn load_error(e: ::config::ConfigError) -> ConfigurationError {
    ConfigurationError::Load(e.to_string())
}
