const PLACEHOLDER_PREFIX: &str = "your_";
const PLACEHOLDER_SUFFIX: &str = "_here";

/// True for blank keys and template placeholders such as `your_openai_api_key_here`.
pub fn is_unset_credential(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || (value.starts_with(PLACEHOLDER_PREFIX) && value.ends_with(PLACEHOLDER_SUFFIX))
}
