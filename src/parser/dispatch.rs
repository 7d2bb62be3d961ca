//! Frame dispatcher: given a value's schema node and the ending characters
//! its parent computed for it, builds the correct frame variant.

use std::sync::Arc;

use super::frame::Frame;
use super::list::ListFrame;
use super::number::NumberFrame;
use super::object::ObjectFrame;
use super::string::StringFrame;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::{SchemaNode, SchemaType};

pub fn build_value_frame(
    schema_root: &SchemaNode,
    value_schema: &Arc<SchemaNode>,
    ending_characters: &str,
) -> SchemaResult<Frame> {
    match value_schema.type_name {
        Some(SchemaType::String) => Ok(Frame::String(StringFrame::new(
            ending_characters,
            value_schema.enum_values.clone(),
            true,
        ))),
        Some(SchemaType::Object) => Ok(Frame::Object(ObjectFrame::new(Arc::clone(value_schema)))),
        Some(SchemaType::Integer) => Ok(Frame::Number(NumberFrame::new(ending_characters, false))),
        Some(SchemaType::Number) => Ok(Frame::Number(NumberFrame::new(ending_characters, true))),
        Some(SchemaType::Array) => {
            let items = value_schema
                .items
                .clone()
                .ok_or_else(|| SchemaError::UnsupportedType("array without items".to_string()))?;
            Ok(Frame::List(ListFrame::new(ending_characters, items)))
        }
        None if value_schema.ref_path.is_some() => {
            let resolved = value_schema.resolve(schema_root)?;
            Ok(Frame::Object(ObjectFrame::new(resolved)))
        }
        Some(SchemaType::Null) => Err(SchemaError::UnsupportedType("null".to_string())),
        None => Err(SchemaError::UnsupportedType("<missing type>".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsupported_type_is_an_error() {
        let root = SchemaNode::from_value(&json!({ "type": "object" }));
        let value_schema = Arc::new(SchemaNode::from_value(&json!({ "type": "null" })));
        let err = build_value_frame(&root, &value_schema, "}").unwrap_err();
        assert_eq!(err, SchemaError::UnsupportedType("null".to_string()));
    }

    #[test]
    fn ref_without_definitions_root_errors() {
        let root = SchemaNode::from_value(&json!({ "type": "object" }));
        let value_schema = Arc::new(SchemaNode::from_value(&json!({ "$ref": "#/definitions/Inner" })));
        let err = build_value_frame(&root, &value_schema, "}").unwrap_err();
        assert_eq!(err, SchemaError::MissingDefinitionsRoot);
    }
}
