//! The sealed set of parser frames. Tagged enum variants rather than a
//! polymorphic hierarchy.

use super::list::ListFrame;
use super::number::NumberFrame;
use super::object::ObjectFrame;
use super::outcome::StepOutcome;
use super::string::StringFrame;
use crate::error::SchemaResult;
use crate::schema::SchemaNode;

#[derive(Debug, Clone)]
pub enum Frame {
    Object(ObjectFrame),
    String(StringFrame),
    Number(NumberFrame),
    List(ListFrame),
}

impl Frame {
    /// Feed one character to the top frame. `popped_child` is `Some` only
    /// immediately after a child frame popped and forwarded a character up
    /// to this one (see `super::outcome` for why this exists).
    pub fn step(
        &mut self,
        c: char,
        popped_child: Option<Frame>,
        schema_root: &SchemaNode,
    ) -> SchemaResult<StepOutcome> {
        match self {
            Frame::Object(f) => f.step(c, popped_child, schema_root),
            Frame::String(f) => Ok(f.step(c)),
            Frame::Number(f) => Ok(f.step(c)),
            Frame::List(f) => f.step(c, schema_root),
        }
    }

    pub fn allowed_characters(&self) -> String {
        match self {
            Frame::Object(f) => f.allowed_characters(),
            Frame::String(f) => f.allowed_characters(),
            Frame::Number(f) => f.allowed_characters(),
            Frame::List(f) => f.allowed_characters(),
        }
    }
}
