use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Compact JWS: three base64url segments joined by dots.
#[allow(clippy::unwrap_used)]
static JWT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap());

/// Mask bearer tokens, emails and long opaque secrets inside free text.
///
/// Tokens go first so their segments are not half-eaten by the other rules.
pub fn redact(input: &str) -> String {
    let out = JWT_REGEX.replace_all(input, "[REDACTED_TOKEN]");
    let out = EMAIL_REGEX.replace_all(&out, "$1***$2");
    OPAQUE_TOKEN_REGEX
        .replace_all(&out, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Keep only the first character of an identifier such as a login name.
pub fn mask_identifier(input: &str) -> String {
    match input.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Display wrapper applying [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
