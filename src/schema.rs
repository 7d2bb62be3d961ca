//! Schema ingestion: turns a raw `serde_json::Value` into the small,
//! `Arc`-shared tree of [`SchemaNode`]s the parser frames are built from.
//!
//! Every derived field is wrapped in `Arc` at construction time so that
//! later clones of the parser stack are cheap. Schema nodes here are never
//! mutated after construction and are shared by reference from every parser
//! frame and every clone of the parser stack.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

/// The JSON Schema `type` keyword, restricted to the subset this validator
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Object,
    Integer,
    Number,
    Array,
    Null,
}

impl SchemaType {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "string" => Some(SchemaType::String),
            "object" => Some(SchemaType::Object),
            "integer" => Some(SchemaType::Integer),
            "number" => Some(SchemaType::Number),
            "array" => Some(SchemaType::Array),
            "null" => Some(SchemaType::Null),
            _ => None,
        }
    }
}

/// An immutable, shared schema node.
///
/// Every field the state machine actually consults is represented directly;
/// everything else in the raw JSON is dropped at ingestion time since this
/// validator only recognizes a fixed feature subset.
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    pub type_name: Option<SchemaType>,
    pub properties: Option<IndexMap<String, Arc<SchemaNode>>>,
    pub additional_properties: Option<Arc<SchemaNode>>,
    pub items: Option<Arc<SchemaNode>>,
    pub enum_values: Option<Vec<String>>,
    pub ref_path: Option<String>,
    /// Only ever populated on the root node: the `definitions`/`$defs` map,
    /// keyed by name, each value an already-parsed (but not yet resolved
    /// against other refs) schema node.
    pub definitions: Option<IndexMap<String, Arc<SchemaNode>>>,
}

impl SchemaNode {
    /// Parse a raw JSON Schema object into a `SchemaNode` tree.
    ///
    /// `definitions`/`$defs` are parsed once, up front, from the root value
    /// and attached only to the returned root node, matching the Python
    /// source's `model_class.extras` lookup at `$ref` resolution time.
    pub fn from_value(value: &Value) -> SchemaNode {
        let mut root = Self::parse_node(value);
        root.definitions = parse_definitions(value);
        root
    }

    fn parse_node(value: &Value) -> SchemaNode {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return SchemaNode::default(),
        };

        let type_name = obj
            .get("type")
            .and_then(Value::as_str)
            .and_then(SchemaType::from_str);

        let properties = obj.get("properties").and_then(Value::as_object).map(|props| {
            props
                .iter()
                .map(|(k, v)| (k.clone(), Arc::new(Self::parse_node(v))))
                .collect()
        });

        let additional_properties = obj
            .get("additionalProperties")
            .map(|v| Arc::new(Self::parse_node(v)));

        let items = obj.get("items").map(|v| Arc::new(Self::parse_node(v)));

        let enum_values = obj.get("enum").and_then(Value::as_array).map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        });

        let ref_path = obj
            .get("$ref")
            .or_else(|| obj.get("ref"))
            .and_then(Value::as_str)
            .map(str::to_string);

        SchemaNode {
            type_name,
            properties,
            additional_properties,
            items,
            enum_values,
            ref_path,
            definitions: None,
        }
    }

    /// Resolve this node against the root's `definitions`/`$defs` table if
    /// it's a bare `$ref`, returning the referenced node instead. Nodes that
    /// aren't refs are returned unchanged.
    pub fn resolve<'a>(self: &'a Arc<Self>, root: &SchemaNode) -> SchemaResult<Arc<SchemaNode>> {
        let Some(ref_path) = &self.ref_path else {
            return Ok(Arc::clone(self));
        };
        if self.type_name.is_some() {
            // A node can carry both a type and a $ref in principle; this
            // validator only treats $ref specially when type is absent
            // (matching `value_schema.type == None and value_schema.ref`).
            return Ok(Arc::clone(self));
        }

        let name = ref_path.rsplit('/').next().unwrap_or(ref_path.as_str());
        let definitions = root
            .definitions
            .as_ref()
            .ok_or(SchemaError::MissingDefinitionsRoot)?;
        definitions
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::UnresolvedRef(name.to_string()))
    }
}

fn parse_definitions(value: &Value) -> Option<IndexMap<String, Arc<SchemaNode>>> {
    let obj = value.as_object()?;
    let defs = obj
        .get("definitions")
        .or_else(|| obj.get("$defs"))
        .and_then(Value::as_object)?;
    Some(
        defs.iter()
            .map(|(k, v)| (k.clone(), Arc::new(SchemaNode::parse_node(v))))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_properties_and_types() {
        let schema = json!({
            "type": "object",
            "properties": {
                "n": { "type": "integer" },
                "s": { "type": "string" }
            }
        });
        let node = SchemaNode::from_value(&schema);
        assert_eq!(node.type_name, Some(SchemaType::Object));
        let props = node.properties.expect("properties");
        assert_eq!(props["n"].type_name, Some(SchemaType::Integer));
        assert_eq!(props["s"].type_name, Some(SchemaType::String));
    }

    #[test]
    fn dictionary_schema_has_no_properties() {
        let schema = json!({
            "type": "object",
            "additionalProperties": { "type": "string" }
        });
        let node = SchemaNode::from_value(&schema);
        assert!(node.properties.is_none());
        assert_eq!(
            node.additional_properties.unwrap().type_name,
            Some(SchemaType::String)
        );
    }

    #[test]
    fn resolves_ref_against_definitions() {
        let schema = json!({
            "type": "object",
            "properties": {
                "inner": { "$ref": "#/definitions/Inner" }
            },
            "definitions": {
                "Inner": {
                    "type": "object",
                    "properties": { "x": { "type": "integer" } }
                }
            }
        });
        let root = SchemaNode::from_value(&schema);
        let inner_ref = Arc::clone(&root.properties.as_ref().unwrap()["inner"]);
        let resolved = inner_ref.resolve(&root).expect("resolve");
        assert_eq!(resolved.type_name, Some(SchemaType::Object));
        assert!(resolved.properties.as_ref().unwrap().contains_key("x"));
    }

    #[test]
    fn missing_definitions_root_is_an_error() {
        let schema = json!({ "$ref": "#/definitions/Missing" });
        let root = SchemaNode::from_value(&schema);
        let root_arc = Arc::new(root.clone());
        let err = root_arc.resolve(&root).unwrap_err();
        assert_eq!(err, SchemaError::MissingDefinitionsRoot);
    }
}
