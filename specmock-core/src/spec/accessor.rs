use serde_json::Value;

use crate::spec::pointer::SpecificationPointer;

/// Read-only indexed view over a parsed specification document.
///
/// Works for both JSON and YAML inputs: the loader normalizes either into a
/// `serde_json::Value` tree before handing it here. Object iteration follows
/// document order (serde_json is built with `preserve_order`).
#[derive(Debug, Clone)]
pub struct SpecificationAccessor {
    document: Value,
}

impl SpecificationAccessor {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Returns the sub-tree at `pointer`, or `None` when nothing exists
    /// there. Array segments must be decimal indices.
    pub fn schema(&self, pointer: &SpecificationPointer) -> Option<&Value> {
        let mut node = &self.document;
        for segment in pointer.segments() {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }
}
