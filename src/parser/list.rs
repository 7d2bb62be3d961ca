//! List frame: recognizes `[ v , v , ... ]` against a homogeneous item schema.
//!
//! Whitespace is *not* skipped inside arrays, an inherited quirk of the
//! original parser rather than a bug fixed here; callers must not emit
//! whitespace inside array literals.

use std::sync::Arc;

use super::dispatch::build_value_frame;
use super::outcome::StepOutcome;
use crate::error::SchemaResult;
use crate::schema::SchemaNode;

#[derive(Debug, Clone)]
pub struct ListFrame {
    item_schema: Arc<SchemaNode>,
    seen_list_opener: bool,
    seen_list_closer: bool,
    ending_characters: String,
}

impl ListFrame {
    pub fn new(ending_characters: impl Into<String>, item_schema: Arc<SchemaNode>) -> Self {
        Self {
            item_schema,
            seen_list_opener: false,
            seen_list_closer: false,
            ending_characters: ending_characters.into(),
        }
    }

    pub fn can_end(&self) -> bool {
        self.seen_list_closer
    }

    pub fn step(&mut self, c: char, schema_root: &SchemaNode) -> SchemaResult<StepOutcome> {
        if self.seen_list_closer {
            return Ok(if self.ending_characters.contains(c) {
                StepOutcome::Pop { forward: Some(c) }
            } else {
                StepOutcome::Continue
            });
        }

        match c {
            '[' => {
                self.seen_list_opener = true;
                let child = build_value_frame(schema_root, &self.item_schema, "],")?;
                Ok(StepOutcome::Push(child))
            }
            ']' => {
                self.seen_list_closer = true;
                Ok(StepOutcome::Continue)
            }
            ',' => {
                let child = build_value_frame(schema_root, &self.item_schema, "],")?;
                Ok(StepOutcome::Push(child))
            }
            _ => Ok(StepOutcome::Continue),
        }
    }

    pub fn allowed_characters(&self) -> String {
        if !self.seen_list_opener {
            "[".to_string()
        } else if !self.seen_list_closer {
            "],".to_string()
        } else {
            self.ending_characters.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaNode;
    use serde_json::json;

    fn number_item() -> Arc<SchemaNode> {
        Arc::new(SchemaNode::from_value(&json!({ "type": "number" })))
    }

    #[test]
    fn requires_opener_first() {
        let frame = ListFrame::new("}", number_item());
        assert_eq!(frame.allowed_characters(), "[");
    }

    #[test]
    fn opener_pushes_an_item_frame() {
        let mut frame = ListFrame::new("}", number_item());
        let root = SchemaNode::default();
        match frame.step('[', &root).unwrap() {
            StepOutcome::Push(_) => {}
            other => panic!("expected Push, got {other:?}"),
        }
        assert_eq!(frame.allowed_characters(), "],");
    }

    #[test]
    fn closer_waits_for_parent_terminator() {
        let mut frame = ListFrame::new("},", number_item());
        let root = SchemaNode::default();
        frame.step('[', &root).unwrap();
        frame.step(']', &root).unwrap();
        assert!(frame.can_end());
        match frame.step('}', &root).unwrap() {
            StepOutcome::Pop { forward } => assert_eq!(forward, Some('}')),
            other => panic!("expected Pop, got {other:?}"),
        }
    }
}
