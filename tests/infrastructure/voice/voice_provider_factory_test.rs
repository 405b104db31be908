use echolingo::domain::{ConfigurationError, VoiceProviderKind};
use echolingo::infrastructure::voice::VoiceProviderFactory;
use echolingo::presentation::config::VoiceSettings;

#[test]
fn given_configured_provider_when_creating_then_returns_matching_provider() {
    let mut settings = VoiceSettings::default();
    settings.hume.api_key = "hume-test".to_string();

    let provider = VoiceProviderFactory::create(VoiceProviderKind::Hume, &settings).unwrap();

    assert_eq!(provider.provider_name(), "hume");
}

#[test]
fn given_provider_without_key_when_creating_then_fails_validation() {
    let settings = VoiceSettings::default();

    let result = VoiceProviderFactory::create(VoiceProviderKind::ElevenLabs, &settings);

    assert!(matches!(
        result,
        Err(ConfigurationError::MissingSetting {
            setting: "ELEVENLABS_API_KEY",
            ..
        })
    ));
}

#[test]
fn given_only_elevenlabs_configured_when_creating_available_then_skips_hume() {
    let mut settings = VoiceSettings::default();
    settings.elevenlabs.api_key = "el-test".to_string();

    let providers = VoiceProviderFactory::create_available(&settings);

    assert_eq!(providers.len(), 1);
    assert_eq!(
        providers[&VoiceProviderKind::ElevenLabs].provider_name(),
        "elevenlabs"
    );
}

#[test]
fn given_both_providers_configured_when_creating_available_then_returns_both() {
    let mut settings = VoiceSettings::default();
    settings.elevenlabs.api_key = "el-test".to_string();
    settings.hume.api_key = "hume-test".to_string();

    let providers = VoiceProviderFactory::create_available(&settings);

    assert!(providers.contains_key(&VoiceProviderKind::ElevenLabs));
    assert!(providers.contains_key(&VoiceProviderKind::Hume));
}

#[test]
fn given_template_placeholder_keys_when_creating_available_then_skips_those_providers() {
    let mut settings = VoiceSettings::default();
    settings.elevenlabs.api_key = "your_elevenlabs_api_key_here".to_string();
    settings.hume.api_key = "hume-test".to_string();

    let providers = VoiceProviderFactory::create_available(&settings);

    assert!(!providers.contains_key(&VoiceProviderKind::ElevenLabs));
    assert!(providers.contains_key(&VoiceProviderKind::Hume));
}

#[test]
fn given_placeholder_hume_key_when_creating_then_fails_validation() {
    let mut settings = VoiceSettings::default();
    settings.hume.api_key = "your_hume_api_key_here".to_string();

    let result = VoiceProviderFactory::create(VoiceProviderKind::Hume, &settings);

    assert!(matches!(
        result,
        Err(ConfigurationError::MissingSetting {
            setting: "HUME_API_KEY",
            ..
        })
    ));
}
