//! String frame: recognizes `"..."`, optionally restricted to an enumeration.
//!
//! Doubles as the object-key parser: when `require_opening_quote` is false
//! the frame starts as if it had already consumed the opening `"` (the
//! object frame consumed it on the caller's behalf).

use super::outcome::{primitive_allowed, primitive_step, StepOutcome};

/// Permissive free-form character class for strings with no enumeration.
/// Escape sequences are not modeled.
const PERMISSIVE_CHARS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-=[]{};:,./<>? \"";

#[derive(Debug, Clone)]
pub struct StringFrame {
    allowed_strings: Option<Vec<String>>,
    parsed_string: String,
    seen_opening_quote: bool,
    seen_closing_quote: bool,
    ending_characters: String,
}

impl StringFrame {
    pub fn new(
        ending_characters: impl Into<String>,
        allowed_strings: Option<Vec<String>>,
        require_opening_quote: bool,
    ) -> Self {
        Self {
            allowed_strings,
            parsed_string: String::new(),
            seen_opening_quote: !require_opening_quote,
            seen_closing_quote: false,
            ending_characters: ending_characters.into(),
        }
    }

    pub fn can_end(&self) -> bool {
        self.seen_closing_quote
    }

    /// The finished key or value content, with quotes already stripped.
    pub fn parsed_string(&self) -> &str {
        &self.parsed_string
    }

    pub fn step(&mut self, c: char) -> StepOutcome {
        let can_end = self.can_end();
        let outcome = primitive_step(&mut self.parsed_string, &self.ending_characters, can_end, c);
        if c == '"' {
            if !self.seen_opening_quote {
                self.seen_opening_quote = true;
                self.parsed_string.clear();
            } else {
                self.seen_closing_quote = true;
                self.parsed_string.pop();
            }
        }
        outcome
    }

    pub fn allowed_characters(&self) -> String {
        primitive_allowed(&self.primitive_characters(), &self.ending_characters, self.can_end())
    }

    fn primitive_characters(&self) -> String {
        if !self.seen_opening_quote {
            return "\"".to_string();
        }
        if self.seen_closing_quote {
            return String::new();
        }
        match &self.allowed_strings {
            Some(allowed) => enum_continuations(&self.parsed_string, allowed),
            None => PERMISSIVE_CHARS.to_string(),
        }
    }
}

/// For each enumeration member that has `parsed` as a prefix, the character
/// that would come next; if `parsed` is itself a complete member, `"` (the
/// closing quote) is also offered. Duplicates are removed; longest-match is
/// not enforced.
fn enum_continuations(parsed: &str, allowed_strings: &[String]) -> String {
    let mut next_chars: Vec<char> = Vec::new();
    for candidate in allowed_strings {
        if let Some(rest) = candidate.strip_prefix(parsed) {
            if let Some(ch) = rest.chars().next() {
                if !next_chars.contains(&ch) {
                    next_chars.push(ch);
                }
            }
        }
    }
    if allowed_strings.iter().any(|s| s == parsed) && !next_chars.contains(&'"') {
        next_chars.push('"');
    }
    next_chars.into_iter().collect()
}
