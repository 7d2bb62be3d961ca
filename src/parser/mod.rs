//! The schema-directed character parser: a stack of [`Frame`]s driven one
//! character at a time by [`ParserRoot`]. See the crate-level docs in
//! `lib.rs` for the full protocol.

mod dispatch;
mod frame;
mod list;
mod number;
mod object;
mod outcome;
mod string;

pub use frame::Frame;
pub use outcome::StepOutcome;

use std::sync::Arc;

use serde_json::Value;

use self::object::ObjectFrame;
use self::outcome::StepOutcome as Outcome;
use crate::error::SchemaResult;
use crate::schema::SchemaNode;

/// Copy-on-write root of the character parser.
///
/// Cloning a `ParserRoot` deep-clones its frame stack (cheap: frames hold
/// small buffers and `Arc`-shared schema handles, never the schema tree
/// itself) so a caller can fork before a speculative character and discard
/// the fork freely.
#[derive(Debug, Clone)]
pub struct ParserRoot {
    schema_root: Arc<SchemaNode>,
    stack: Vec<Frame>,
}

impl ParserRoot {
    /// Build a parser for `schema`, assumed to describe a top-level JSON
    /// object (top-level strings/arrays/numbers aren't supported without a
    /// different entry point).
    pub fn new(schema: &Value) -> Self {
        let schema_root = Arc::new(SchemaNode::from_value(schema));
        Self::seeded(schema_root)
    }

    /// Build a parser from an already-parsed schema node, for callers that
    /// share one [`SchemaNode`] tree across many parser instances.
    pub fn from_schema_node(schema_root: Arc<SchemaNode>) -> Self {
        Self::seeded(schema_root)
    }

    /// Restore a parser from a checkpointed frame stack rather than starting
    /// fresh.
    pub fn from_checkpoint(schema_root: Arc<SchemaNode>, stack: Vec<Frame>) -> Self {
        Self { schema_root, stack }
    }

    fn seeded(schema_root: Arc<SchemaNode>) -> Self {
        let root_frame = Frame::Object(ObjectFrame::new(Arc::clone(&schema_root)));
        Self {
            schema_root,
            stack: vec![root_frame],
        }
    }

    /// The set of characters (as a string; duplicates are possible but
    /// harmless) legal as the very next input. Empty once `can_end()` holds.
    pub fn allowed_characters(&self) -> String {
        match self.stack.last() {
            Some(frame) => frame.allowed_characters(),
            None => String::new(),
        }
    }

    /// True iff the stack is empty: a complete top-level value has been
    /// parsed and no further input is accepted.
    pub fn can_end(&self) -> bool {
        self.stack.is_empty()
    }

    /// Consume `c`, returning a fresh `ParserRoot`; `self` is untouched.
    ///
    /// `c` must be present in `allowed_characters()`; violating that, or
    /// calling this after `can_end()`, is undefined behavior per the caller
    /// contract, checked with `debug_assert!` rather than a `Result`, since
    /// they're bugs in the driver loop, not data the schema could ever
    /// reject. A schema that can't be resolved while pushing a
    /// newly-encountered value frame (an unsupported `type`, an unresolved
    /// `$ref`) *is* surfaced as a `SchemaError`, since that's a property of
    /// the schema, not of the input character.
    pub fn add_character(&self, c: char) -> SchemaResult<Self> {
        debug_assert!(
            !self.can_end(),
            "add_character called after parsing already completed (over-consumption)"
        );
        debug_assert!(
            self.allowed_characters().contains(c),
            "character `{c}` is not in allowed_characters()"
        );

        let mut clone = self.clone();
        clone.dispatch(c)?;
        Ok(clone)
    }

    fn dispatch(&mut self, mut c: char) -> SchemaResult<()> {
        let mut popped_child: Option<Frame> = None;
        loop {
            let Some(top) = self.stack.last_mut() else {
                break;
            };
            let outcome = top.step(c, popped_child.take(), &self.schema_root)?;
            match outcome {
                Outcome::Continue => break,
                Outcome::Push(frame) => {
                    self.stack.push(frame);
                    break;
                }
                Outcome::Pop { forward } => {
                    let popped = self.stack.pop().expect("stack.last_mut() just matched Some");
                    match forward {
                        Some(forward_char) => {
                            c = forward_char;
                            popped_child = Some(popped);
                        }
                        None => break,
                    }
                }
            }
        }
        Ok(())
    }
}
