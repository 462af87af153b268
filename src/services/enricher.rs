use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

// Loose on purpose; it will not catch every format.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}?[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern is valid")
});

/// Pulls email addresses out of page text, first occurrence wins.
pub fn extract_emails(text: &str) -> Vec<String> {
    dedupe_matches(&EMAIL_REGEX, text)
}

/// Pulls phone numbers out of page text, first occurrence wins.
pub fn extract_phones(text: &str) -> Vec<String> {
    dedupe_matches(&PHONE_REGEX, text)
}

fn dedupe_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
