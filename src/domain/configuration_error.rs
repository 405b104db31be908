/// Raised when settings or provider selection cannot produce a working service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to load configuration: {0}")]
    Load(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("unsupported {capability} provider: {name}. Supported providers: {supported}")]
    UnsupportedProvider {
        capability: &'static str,
        name: String,
        supported: &'static str,
    },
    #[error("{setting} is required for the {provider} provider")]
    MissingSetting {
        setting: &'static str,
        provider: &'static str,
    },
}
