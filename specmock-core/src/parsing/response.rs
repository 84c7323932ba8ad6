use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::error::SpecificationError;
use crate::mock::MockResponse;
use crate::parsing::error_handler::ParsingErrorHandler;
use crate::parsing::schema_parser::SchemaParser;
use crate::spec::{SpecificationAccessor, SpecificationPointer};

static MEDIA_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w!#$&^.+-]+/[\w!#$&^.+*-]+$").expect("valid"));

/// Parses one resolved response sub-tree (`content` media types and
/// `headers`) into a [`MockResponse`]. The status code is left at its
/// default; the collection parser owns that field.
pub struct ResponseParser {
    error_handler: Arc<dyn ParsingErrorHandler>,
}

impl ResponseParser {
    pub fn new(error_handler: Arc<dyn ParsingErrorHandler>) -> Self {
        Self { error_handler }
    }

    fn parse_content(
        &self,
        content: &Value,
        pointer: &SpecificationPointer,
    ) -> Result<BTreeMap<String, Value>, SpecificationError> {
        let map = content.as_object().ok_or_else(|| {
            SpecificationError::schema(pointer.path(), "content must be an object")
        })?;

        let mut parsed = BTreeMap::new();
        for (media_type, media_type_schema) in map {
            let media_type_pointer = pointer.with_path_element(media_type);
            if !MEDIA_TYPE_RE.is_match(media_type) {
                self.error_handler
                    .report_error("Invalid media type.", &media_type_pointer);
                continue;
            }
            let schema = media_type_schema
                .get("schema")
                .cloned()
                .unwrap_or(Value::Null);
            parsed.insert(media_type.clone(), schema);
        }
        Ok(parsed)
    }

    fn parse_headers(
        &self,
        headers: &Value,
        pointer: &SpecificationPointer,
    ) -> Result<BTreeMap<String, Value>, SpecificationError> {
        let map = headers.as_object().ok_or_else(|| {
            SpecificationError::schema(pointer.path(), "headers must be an object")
        })?;

        Ok(map
            .iter()
            .map(|(name, header)| {
                let schema = header.get("schema").cloned().unwrap_or(Value::Null);
                (name.clone(), schema)
            })
            .collect())
    }
}

impl SchemaParser for ResponseParser {
    type Output = MockResponse;

    fn parse(
        &self,
        specification: &SpecificationAccessor,
        pointer: &SpecificationPointer,
    ) -> Result<MockResponse, SpecificationError> {
        let node = specification.schema(pointer).ok_or_else(|| {
            SpecificationError::schema(pointer.path(), "response specification is absent")
        })?;
        if !node.is_object() {
            return Err(SpecificationError::schema(
                pointer.path(),
                "response specification must be an object",
            ));
        }

        let mut response = MockResponse::default();

        if let Some(content) = node.get("content") {
            response.content = self.parse_content(content, &pointer.with_path_element("content"))?;
        }
        if let Some(headers) = node.get("headers") {
            response.headers = self.parse_headers(headers, &pointer.with_path_element("headers"))?;
        }

        Ok(response)
    }
}
