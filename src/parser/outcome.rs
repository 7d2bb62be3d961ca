//! The forwarding-on-pop protocol.
//!
//! A frame's `step` never touches the stack directly, it has no reference
//! to it. Instead it returns a `StepOutcome` describing what happened, and
//! the root's dispatch loop (see [`super::ParserRoot`]) acts on it: pushing a
//! child, or popping the frame and re-dispatching the forwarded character to
//! whatever is now on top. This is what lets frames stay plain data plus
//! logic instead of holding a back-pointer into a structure that owns them.

use super::frame::Frame;

#[derive(Debug)]
pub enum StepOutcome {
    /// The character was consumed; the frame remains on top of the stack.
    Continue,
    /// The character was consumed and a child frame must be pushed on top.
    Push(Frame),
    /// The frame is done. If `forward` is set, the character wasn't this
    /// frame's content, it belongs to the parent and must be redelivered.
    Pop { forward: Option<char> },
}

/// Shared primitive contract used by [`super::string::StringFrame`] and
/// [`super::number::NumberFrame`]: once the frame can end, a character drawn
/// from `ending_characters` pops the frame and forwards that character
/// upward; otherwise the character is appended to `parsed_string`.
pub fn primitive_step(
    parsed_string: &mut String,
    ending_characters: &str,
    can_end: bool,
    c: char,
) -> StepOutcome {
    if can_end && ending_characters.contains(c) {
        StepOutcome::Pop { forward: Some(c) }
    } else {
        parsed_string.push(c);
        StepOutcome::Continue
    }
}

/// Combines a primitive's own candidate characters with its `ending_characters`
/// once it's in a terminable state.
pub fn primitive_allowed(primitive_chars: &str, ending_characters: &str, can_end: bool) -> String {
    let mut allowed = primitive_chars.to_string();
    if can_end {
        allowed.push_str(ending_characters);
    }
    allowed
}
