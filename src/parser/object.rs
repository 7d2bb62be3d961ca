//! Object frame: recognizes `{ "k": v, ... }` against a properties map or a
//! dictionary (`additionalProperties`-only) schema.

use std::sync::Arc;

use indexmap::IndexSet;

use super::dispatch::build_value_frame;
use super::frame::Frame;
use super::outcome::StepOutcome;
use super::string::StringFrame;
use crate::error::SchemaResult;
use crate::schema::SchemaNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStage {
    StartObject,
    ParsingKeyOrEnd,
    ParsingValue,
    ParsingSeparatorOrEnd,
    EndObject,
}

#[derive(Debug, Clone)]
pub struct ObjectFrame {
    schema: Arc<SchemaNode>,
    stage: ObjectStage,
    existing_keys: IndexSet<String>,
    current_key: Option<String>,
    is_dictionary: bool,
}

impl ObjectFrame {
    pub fn new(schema: Arc<SchemaNode>) -> Self {
        let is_dictionary = schema.properties.is_none();
        Self {
            schema,
            stage: ObjectStage::StartObject,
            existing_keys: IndexSet::new(),
            current_key: None,
            is_dictionary,
        }
    }

    pub fn step(
        &mut self,
        c: char,
        popped_child: Option<Frame>,
        schema_root: &SchemaNode,
    ) -> SchemaResult<StepOutcome> {
        // Whitespace is silently skipped anywhere in object scope.
        if c.is_whitespace() {
            return Ok(StepOutcome::Continue);
        }

        match self.stage {
            ObjectStage::StartObject => {
                if c == '{' {
                    self.stage = ObjectStage::ParsingKeyOrEnd;
                }
                Ok(StepOutcome::Continue)
            }
            ObjectStage::ParsingKeyOrEnd => self.step_parsing_key_or_end(c, popped_child, schema_root),
            ObjectStage::ParsingValue => Ok(self.step_parsing_value(c)),
            ObjectStage::ParsingSeparatorOrEnd => Ok(self.step_parsing_separator_or_end(c)),
            ObjectStage::EndObject => Ok(StepOutcome::Continue),
        }
    }

    fn step_parsing_key_or_end(
        &mut self,
        c: char,
        popped_child: Option<Frame>,
        schema_root: &SchemaNode,
    ) -> SchemaResult<StepOutcome> {
        match c {
            '}' => {
                self.stage = ObjectStage::EndObject;
                Ok(StepOutcome::Pop { forward: None })
            }
            '"' => {
                let possible_keys = if self.is_dictionary {
                    None
                } else {
                    Some(self.remaining_property_names())
                };
                let key_parser = StringFrame::new(":", possible_keys, false);
                Ok(StepOutcome::Push(Frame::String(key_parser)))
            }
            ':' => {
                let key = match popped_child {
                    Some(Frame::String(key_frame)) => key_frame.parsed_string().to_string(),
                    _ => String::new(),
                };
                self.existing_keys.insert(key.clone());
                self.current_key = Some(key.clone());

                let (value_schema, can_continue) = if self.is_dictionary {
                    let value_schema = Arc::clone(
                        self.schema
                            .additional_properties
                            .as_ref()
                            .expect("dictionary object schema must carry additionalProperties"),
                    );
                    (value_schema, true)
                } else {
                    let properties = self
                        .schema
                        .properties
                        .as_ref()
                        .expect("non-dictionary object schema must carry properties");
                    let value_schema = Arc::clone(
                        properties
                            .get(&key)
                            .expect("key parser only offers unseen property names"),
                    );
                    let can_continue = properties
                        .keys()
                        .any(|name| !self.existing_keys.contains(name));
                    (value_schema, can_continue)
                };

                let mut ending_characters = String::from("}");
                if can_continue {
                    ending_characters.push(',');
                }
                self.stage = ObjectStage::ParsingValue;
                let child = build_value_frame(schema_root, &value_schema, &ending_characters)?;
                Ok(StepOutcome::Push(child))
            }
            _ => Ok(StepOutcome::Continue),
        }
    }

    fn step_parsing_value(&mut self, c: char) -> StepOutcome {
        match c {
            '"' => {
                self.stage = ObjectStage::ParsingSeparatorOrEnd;
                StepOutcome::Continue
            }
            ',' => {
                self.stage = ObjectStage::ParsingKeyOrEnd;
                StepOutcome::Continue
            }
            '}' => {
                self.stage = ObjectStage::EndObject;
                StepOutcome::Pop { forward: None }
            }
            _ => StepOutcome::Continue,
        }
    }

    fn step_parsing_separator_or_end(&mut self, c: char) -> StepOutcome {
        match c {
            ',' => {
                self.stage = ObjectStage::ParsingKeyOrEnd;
                StepOutcome::Continue
            }
            '}' => {
                self.stage = ObjectStage::EndObject;
                StepOutcome::Pop { forward: None }
            }
            _ => StepOutcome::Continue,
        }
    }

    /// Property names not yet consumed by an existing key.
    fn remaining_property_names(&self) -> Vec<String> {
        self.schema
            .properties
            .as_ref()
            .expect("non-dictionary object schema must carry properties")
            .keys()
            .filter(|name| !self.existing_keys.contains(*name))
            .cloned()
            .collect()
    }

    /// Whether the object could legally end here. `required` isn't modeled,
    /// so this is always true.
    fn can_end(&self) -> bool {
        true
    }

    /// Whether another key could still be started: always true for a
    /// dictionary, and true for a properties schema only while unseen
    /// property names remain.
    fn can_parse_key(&self) -> bool {
        self.is_dictionary || self.schema
            .properties
            .as_ref()
            .map(|props| props.keys().any(|name| !self.existing_keys.contains(name)))
            .unwrap_or(false)
    }

    pub fn allowed_characters(&self) -> String {
        let mut chars = String::from(" ");
        match self.stage {
            ObjectStage::StartObject => chars.push('{'),
            ObjectStage::ParsingKeyOrEnd => {
                if self.can_end() {
                    chars.push('}');
                }
                if self.can_parse_key() {
                    chars.push('"');
                }
            }
            ObjectStage::ParsingValue | ObjectStage::ParsingSeparatorOrEnd => {
                if self.can_end() {
                    chars.push('}');
                }
                if self.can_parse_key() {
                    chars.push(',');
                }
            }
            ObjectStage::EndObject => {}
        }
        chars
    }
}
