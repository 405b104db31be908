use echolingo::infrastructure::observability::sanitize_for_log;

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_for_log("  hola mundo  "), "hola mundo");
}

#[test]
fn given_blank_text_when_sanitizing_then_marks_it_empty() {
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_to_hundred_chars() {
    let text = "a".repeat(250);

    let sanitized = sanitize_for_log(&text);

    assert_eq!(sanitized, format!("{}... (250 chars total)", "a".repeat(100)));
}

#[test]
fn given_multibyte_text_over_limit_when_sanitizing_then_cuts_on_char_boundary() {
    let text = "é".repeat(150);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_credentials_in_text_when_sanitizing_then_values_are_redacted() {
    let sanitized =
        sanitize_for_log("Authorization: Bearer sk-abc123 url?api_key=xyz&token=t0k password=hunter2");

    assert!(!sanitized.contains("sk-abc123"));
    assert!(!sanitized.contains("xyz"));
    assert!(!sanitized.contains("t0k"));
    assert!(!sanitized.contains("hunter2"));
    assert_eq!(sanitized.matches("[REDACTED]").count(), 4);
}

#[test]
fn given_text_without_credentials_when_sanitizing_then_words_like_task_survive() {
    assert_eq!(sanitize_for_log("finish the task-list"), "finish the task-list");
}
