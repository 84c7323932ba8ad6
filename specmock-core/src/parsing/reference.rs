use std::collections::HashSet;

use serde_json::Value;

use crate::error::{ReferenceError, SpecificationError};
use crate::parsing::schema_parser::SchemaParser;
use crate::spec::{SpecificationAccessor, SpecificationPointer};

/// Follows `$ref` indirection before delegating to an inner parser.
///
/// Only local refs (`#/...`) are supported. Chains are followed to their
/// end; a ref visited twice in one chain is a cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceResolvingParser;

impl ReferenceResolvingParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolves any reference at `pointer` and invokes `parser` at the
    /// resolved location; invokes it directly when the node is not a
    /// reference.
    pub fn resolve_and_parse<P: SchemaParser>(
        &self,
        specification: &SpecificationAccessor,
        pointer: &SpecificationPointer,
        parser: &P,
    ) -> Result<P::Output, SpecificationError> {
        let resolved = resolve_pointer(specification, pointer)?;
        parser.parse(specification, &resolved)
    }
}

fn resolve_pointer(
    specification: &SpecificationAccessor,
    pointer: &SpecificationPointer,
) -> Result<SpecificationPointer, ReferenceError> {
    let mut current = pointer.clone();
    let mut visited = HashSet::new();

    loop {
        let Some(ref_str) = specification
            .schema(&current)
            .and_then(|node| node.get("$ref"))
            .and_then(Value::as_str)
        else {
            return Ok(current);
        };

        if !visited.insert(ref_str.to_string()) {
            return Err(ReferenceError::Cycle(ref_str.to_string()));
        }

        current = pointer_from_ref(ref_str)?;
        if specification.schema(&current).is_none() {
            return Err(ReferenceError::NotFound(ref_str.to_string()));
        }
    }
}

fn pointer_from_ref(ref_str: &str) -> Result<SpecificationPointer, ReferenceError> {
    let Some(fragment) = ref_str.strip_prefix('#') else {
        return Err(ReferenceError::ExternalRef(ref_str.to_string()));
    };
    if fragment.is_empty() {
        return Ok(SpecificationPointer::root());
    }
    let Some(body) = fragment.strip_prefix('/') else {
        return Err(ReferenceError::Malformed(ref_str.to_string()));
    };
    Ok(SpecificationPointer::from_segments(
        body.split('/').map(decode_pointer_token),
    ))
}

// RFC 6901 escapes; ~1 first so "~01" decodes to "~1", not "/".
fn decode_pointer_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}
