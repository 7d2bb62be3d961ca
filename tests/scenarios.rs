use schema_char_parser::ParserRoot;
use serde_json::json;

fn drive(root: &ParserRoot, input: &str) -> ParserRoot {
    let mut current = root.clone();
    for c in input.chars() {
        current = current.add_character(c).unwrap();
    }
    current
}

#[test]
fn simple_object_completes_and_ends() {
    let schema = json!({
        "type": "object",
        "properties": { "n": { "type": "integer" } }
    });
    let mut root = ParserRoot::new(&schema);
    let instance = r#"{"n":42}"#;
    for (i, c) in instance.chars().enumerate() {
        if i < instance.chars().count() - 1 {
            assert!(!root.can_end(), "should not end before the closing brace");
        }
        assert!(
            root.allowed_characters().contains(c),
            "char {c:?} should be legal at step {i}"
        );
        root = root.add_character(c).unwrap();
    }
    assert!(root.can_end());
}

#[test]
fn partial_number_excludes_decimal_point_for_integer() {
    let schema = json!({
        "type": "object",
        "properties": {
            "n": { "type": "integer" },
            "m": { "type": "integer" }
        }
    });
    let root = ParserRoot::new(&schema);
    let partial = drive(&root, r#"{"n":4"#);
    let allowed = partial.allowed_characters();
    for d in "0123456789".chars() {
        assert!(allowed.contains(d), "missing digit {d}");
    }
    assert!(allowed.contains(','));
    assert!(allowed.contains('}'));
    assert!(!allowed.contains('.'));
}

#[test]
fn enum_narrows_to_the_single_legal_continuation() {
    let schema = json!({
        "type": "object",
        "properties": {
            "flag": { "type": "string", "enum": ["yes", "no"] }
        }
    });
    let root = ParserRoot::new(&schema);
    let partial = drive(&root, r#"{"flag":"y"#);
    assert_eq!(partial.allowed_characters(), "e");
}

#[test]
fn array_of_numbers_parses_to_completion() {
    let schema = json!({
        "type": "object",
        "properties": {
            "xs": { "type": "array", "items": { "type": "number" } }
        }
    });
    let root = ParserRoot::new(&schema);
    let partial = drive(&root, r#"{"xs":[1.5,"#);
    let allowed = partial.allowed_characters();
    for d in "0123456789".chars() {
        assert!(allowed.contains(d));
    }
    assert!(allowed.contains('-'));

    let complete = drive(&root, r#"{"xs":[1.5,2,3]}"#);
    assert!(complete.can_end());
}

#[test]
fn ref_to_definitions_resolves_to_an_object_frame() {
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
    let root = ParserRoot::new(&schema);
    let complete = drive(&root, r#"{"inner":{"x":7}}"#);
    assert!(complete.can_end());
}

#[test]
fn dictionary_schema_accepts_arbitrary_key_names() {
    let schema = json!({
        "type": "object",
        "additionalProperties": { "type": "string" }
    });
    let root = ParserRoot::new(&schema);
    let complete = drive(&root, r#"{"a":"1","b":"2"}"#);
    assert!(complete.can_end());
}
