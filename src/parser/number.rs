//! Number frame: recognizes an integer or floating-point JSON literal.
//!
//! Shares the "primitive" pop/forward contract with
//! [`super::string::StringFrame`]; exponents, leading `+`, and leading-zero
//! restrictions are deliberately unmodeled.

use super::outcome::{primitive_allowed, primitive_step, StepOutcome};

const DIGITS: &str = "0123456789";

#[derive(Debug, Clone)]
pub struct NumberFrame {
    allow_floating_point: bool,
    seen_decimal_point: bool,
    parsed_string: String,
    ending_characters: String,
}

impl NumberFrame {
    pub fn new(ending_characters: impl Into<String>, allow_floating_point: bool) -> Self {
        Self {
            allow_floating_point,
            seen_decimal_point: false,
            parsed_string: String::new(),
            ending_characters: ending_characters.into(),
        }
    }

    pub fn can_end(&self) -> bool {
        self.parsed_string
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    }

    pub fn step(&mut self, c: char) -> StepOutcome {
        let can_end = self.can_end();
        let outcome = primitive_step(&mut self.parsed_string, &self.ending_characters, can_end, c);
        if c == '.' {
            self.seen_decimal_point = true;
        }
        outcome
    }

    pub fn allowed_characters(&self) -> String {
        let mut primitive = String::from(DIGITS);
        if self.parsed_string.is_empty() {
            primitive.push('-');
        }
        if self.allow_floating_point && !self.seen_decimal_point {
            primitive.push('.');
        }
        primitive_allowed(&primitive, &self.ending_characters, self.can_end())
    }
}
