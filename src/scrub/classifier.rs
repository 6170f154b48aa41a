use crate::scrub::types::{ScrubConfig, Session};
use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled patterns, checked in priority order. Matching is purely
// syntactic: the IPv4 rule accepts any 1-3 digit groups without range
// validation, and the email rule does no DNS-level checks.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap()
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());

/// Substrings that mark a string as identifier-like (case-insensitive)
const ID_KEYWORDS: [&str; 3] = ["id", "uuid", "guid"];

/// Classify a string leaf and return its anonymized substitute.
///
/// Rules are applied in fixed priority order, first match wins:
/// email, URL, IPv4, phone, identifier-like (when `preserve_ids` is set),
/// then the generic fallback. The ordering is an observable contract: a
/// string matching several shapes is replaced by the most specific one.
pub fn classify_and_substitute(s: &str, config: &ScrubConfig, session: &mut Session) -> String {
    if EMAIL_REGEX.is_match(s) {
        return "user@example.com".to_string();
    }
    if URL_REGEX.is_match(s) {
        return "https://example.com".to_string();
    }
    if IPV4_REGEX.is_match(s) {
        return "192.168.1.1".to_string();
    }
    if PHONE_REGEX.is_match(s) {
        return "555-000-0000".to_string();
    }

    if config.preserve_ids {
        let lowered = s.to_lowercase();
        if ID_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
            return session.pseudonym_for(s);
        }
    }

    if config.preserve_lengths {
        "X".repeat(s.chars().count())
    } else {
        "[STRING]".to_string()
    }
}
