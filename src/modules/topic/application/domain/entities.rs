use regex::Regex;
use std::sync::OnceLock;

/// Maximum length, in characters, of a topic excerpt.
pub const EXCERPT_LENGTH: usize = 200;

static TAG_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Plain-text summary of a topic body: markup removed, whitespace collapsed,
/// cut to `max_chars` characters.
pub fn make_excerpt(body: &str, max_chars: usize) -> String {
    let mut text = body.to_string();

    if let Ok(tags) = TAG_REGEX.get_or_init(|| Regex::new(r"(?s)<[^>]*>")) {
        text = tags.replace_all(&text, " ").into_owned();
    }

    let collapsed = match WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+")) {
        Ok(ws) => ws.replace_all(&text, " ").into_owned(),
        Err(_) => text.split_whitespace().collect::<Vec<_>>().join(" "),
    };

    collapsed.trim().chars().take(max_chars).collect()
}
