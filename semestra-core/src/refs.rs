//! Reference tokens embedded in event descriptions.
//!
//! A token is `@` followed by a path-like identifier, e.g.
//! `@cs2040/b2c4-...`, which the presentation layer resolves to a course or
//! class link. The calendar engine treats descriptions as opaque; these
//! helpers exist for the layers that do resolve them.

use std::sync::OnceLock;

use regex::Regex;

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"@[\w/-]+").expect("reference token regex is valid")
    })
}

/// Extract all reference tokens from `text`, without the `@` sigil, in
/// order of appearance.
pub fn reference_tokens(text: &str) -> Vec<String> {
    token_regex()
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

/// Remove all reference tokens from `text` for plain display.
pub fn strip_reference_tokens(text: &str) -> String {
    token_regex().replace_all(text, "").trim().to_string()
}
