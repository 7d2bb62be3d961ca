//! Illustrative driver: feeds a hardcoded JSON instance through a schema one
//! character at a time, printing the allowed set before each step. Not part
//! of the library's public contract, a worked example of the protocol a
//! real token sampler would run.

use schema_char_parser::ParserRoot;
use serde_json::json;

fn main() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "role": { "type": "string", "enum": ["admin", "user"] },
            "age": { "type": "integer" }
        }
    });
    let instance = r#"{"name":"ada","role":"admin","age":37}"#;

    let mut root = ParserRoot::new(&schema);
    for c in instance.chars() {
        let allowed = root.allowed_characters();
        println!("allowed={allowed:?} next={c:?}");
        root = root
            .add_character(c)
            .expect("instance must conform to the schema");
    }
    println!("can_end={}", root.can_end());
}
