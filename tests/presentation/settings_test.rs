use echolingo::domain::{ConfigurationError, TranslationProviderKind, VoiceProviderKind};
use echolingo::presentation::config::{Environment, Settings, mask_secret};

fn valid_settings() -> Settings {
    let mut settings = Settings::default();
    settings.openai.api_key = "sk-test-key".to_string();
    settings.voice.hume.api_key = "hume-key".to_string();
    settings
}

fn problems(settings: &Settings) -> String {
    match settings.validate() {
        Err(ConfigurationError::Invalid(problems)) => problems,
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn given_defaults_when_inspecting_then_match_documented_values() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 50000);
    assert_eq!(settings.transcription.model, "whisper-1");
    assert_eq!(settings.translation.provider, TranslationProviderKind::OpenAi);
    assert_eq!(settings.translation.model, "gpt-4o-mini");
    assert!((settings.translation.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(settings.translation.sambanova.base_url, "https://api.sambanova.ai/v1");
    assert_eq!(settings.translation.sambanova.model, "Meta-Llama-3.1-8B-Instruct");
    assert_eq!(settings.voice.provider, VoiceProviderKind::Hume);
    assert_eq!(settings.voice.elevenlabs.default_voice_id, "o47F6fLSHEFdPzySrC5z");
    assert_eq!(settings.voice.elevenlabs.model_id, "eleven_multilingual_v2");
    assert_eq!(settings.voice.hume.voice_id, "30edfa2e-7d75-45fb-8ccf-e280941393ee");
    assert_eq!(settings.storage.max_upload_size_bytes, 100 * 1024 * 1024);
}

#[test]
fn given_complete_settings_when_validating_then_succeeds() {
    assert!(valid_settings().validate().is_ok());
}

#[test]
fn given_missing_openai_key_when_validating_then_reports_it() {
    let mut settings = valid_settings();
    settings.openai.api_key = String::new();

    assert!(problems(&settings).contains("OPENAI_API_KEY is required"));
}

#[test]
fn given_placeholder_openai_key_when_validating_then_treats_it_as_missing() {
    let mut settings = valid_settings();
    settings.openai.api_key = "your_openai_api_key_here".to_string();

    assert!(problems(&settings).contains("OPENAI_API_KEY is required"));
}

#[test]
fn given_openai_key_without_prefix_when_validating_then_reports_format() {
    let mut settings = valid_settings();
    settings.openai.api_key = "abc123".to_string();

    assert!(problems(&settings).contains("should start with 'sk-'"));
}

#[test]
fn given_default_voice_provider_without_key_when_validating_then_reports_it() {
    let mut settings = valid_settings();
    settings.voice.provider = VoiceProviderKind::ElevenLabs;

    assert!(problems(&settings).contains("ELEVENLABS_API_KEY is required"));
}

#[test]
fn given_sambanova_without_key_when_validating_then_reports_it() {
    let mut settings = valid_settings();
    settings.translation.provider = TranslationProviderKind::SambaNova;

    assert!(problems(&settings).contains("SAMBANOVA_API_KEY is required"));
}

#[test]
fn given_unknown_log_level_when_validating_then_reports_it() {
    let mut settings = valid_settings();
    settings.logging.level = "verbose".to_string();

    assert!(problems(&settings).contains("invalid log level: verbose"));
}

#[test]
fn given_several_problems_when_validating_then_reports_all_of_them() {
    let mut settings = Settings::default();
    settings.logging.level = "loud".to_string();

    let problems = problems(&settings);

    assert!(problems.contains("OPENAI_API_KEY"));
    assert!(problems.contains("HUME_API_KEY"));
    assert!(problems.contains("invalid log level"));
}

#[test]
fn given_secret_when_masking_then_only_last_four_chars_remain() {
    assert_eq!(mask_secret("sk-abcdef123456"), "********3456");
    assert_eq!(mask_secret("abc"), "****");
}

#[test]
fn given_no_settings_file_when_loading_then_defaults_are_used() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.app.name, "EchoLingo");
    assert_eq!(settings.translation.sambanova.model, "Meta-Llama-3.1-8B-Instruct");
    assert_eq!(settings.voice.hume.voice_id, "30edfa2e-7d75-45fb-8ccf-e280941393ee");
}

#[test]
fn given_storage_settings_when_creating_directories_then_input_output_and_static_exist() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings.storage.temp_dir = dir.path().join("temp");
    settings.storage.static_dir = dir.path().join("static");

    settings.storage.create_directories().unwrap();

    assert!(dir.path().join("temp/input").is_dir());
    assert!(dir.path().join("temp/output").is_dir());
    assert!(dir.path().join("static").is_dir());
}
