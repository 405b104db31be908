/// System prompt asking the model for the translation alone.
pub fn translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are a translation assistant. Translate the following text into {}. \
         Provide only the translated text without any explanations or additional content.",
        target_language.trim()
    )
}
