use std::fmt;

use serde::Serialize;

/// Fatal, construction-time schema problems.
///
/// Illegal-character and over-consumption errors are not represented here:
/// those are caller-contract violations caught with `debug_assert!` at the
/// call site instead of surfaced as data.
///
/// `Serialize` is derived so a driver loop can log or report a failed schema
/// load as structured JSON rather than a formatted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum SchemaError {
    /// The dispatcher was asked to build a frame for a `type` it doesn't
    /// implement, or a `$ref` whose final path segment has no entry in
    /// `definitions`/`$defs`.
    UnsupportedType(String),
    /// A `$ref` was present but the root schema has neither `definitions`
    /// nor `$defs` to resolve it against.
    MissingDefinitionsRoot,
    /// A `$ref` pointed at a name that isn't in the resolved definitions map.
    UnresolvedRef(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnsupportedType(t) => write!(f, "unsupported schema type: {t}"),
            SchemaError::MissingDefinitionsRoot => {
                write!(f, "schema has a $ref but no definitions or $defs root")
            }
            SchemaError::UnresolvedRef(name) => {
                write!(f, "$ref target not found in definitions: {name}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

pub type SchemaResult<T> = Result<T, SchemaError>;
