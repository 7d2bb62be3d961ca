//! schema-char-parser - character-level incremental JSON Schema validator
//!
//! Drives a stack of parsing frames one character at a time so a caller
//! (typically a token sampler for a text generator) can ask "what can come
//! next" before committing to a character, and can cheaply fork the parser
//! to try one speculatively. See [`ParserRoot`] for the entry point.

pub mod error;
pub mod parser;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use parser::{Frame, ParserRoot};
pub use schema::{SchemaNode, SchemaType};
