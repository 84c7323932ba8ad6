use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::SpecificationError;
use crate::mock::{MockResponse, MockResponseCollection};
use crate::parsing::error_handler::ParsingErrorHandler;
use crate::parsing::reference::ReferenceResolvingParser;
use crate::parsing::response::ResponseParser;
use crate::parsing::schema_parser::SchemaParser;
use crate::spec::{SpecificationAccessor, SpecificationPointer};

const DEFAULT_STATUS_KEY: &str = "default";

/// Parses the `responses` object of one operation into a
/// [`MockResponseCollection`].
///
/// Entries that fail structural validation are reported to the error
/// handler and dropped; sibling entries are unaffected. A failure raised
/// while resolving a reference or parsing a structurally valid entry is not
/// recovered here and aborts the call.
pub struct ResponseCollectionParser<P = ResponseParser>
where
    P: SchemaParser<Output = MockResponse>,
{
    response_parser: P,
    resolving_parser: ReferenceResolvingParser,
    error_handler: Arc<dyn ParsingErrorHandler>,
}

impl ResponseCollectionParser {
    /// Wires the standard response parser against the given error handler.
    pub fn with_default_parser(error_handler: Arc<dyn ParsingErrorHandler>) -> Self {
        Self::new(
            ResponseParser::new(error_handler.clone()),
            ReferenceResolvingParser::new(),
            error_handler,
        )
    }
}

impl<P> ResponseCollectionParser<P>
where
    P: SchemaParser<Output = MockResponse>,
{
    pub fn new(
        response_parser: P,
        resolving_parser: ReferenceResolvingParser,
        error_handler: Arc<dyn ParsingErrorHandler>,
    ) -> Self {
        Self {
            response_parser,
            resolving_parser,
            error_handler,
        }
    }

    fn validate_response(
        &self,
        status_key: &str,
        response_specification: &Value,
        pointer: &SpecificationPointer,
    ) -> bool {
        let mut is_valid = true;

        if status_key != DEFAULT_STATUS_KEY && !is_integer_status_key(status_key) {
            is_valid = false;
            self.error_handler
                .report_error("Invalid status code. Must be integer or \"default\".", pointer);
        }

        if !response_specification.is_object() {
            is_valid = false;
            self.error_handler
                .report_error("Invalid response specification.", pointer);
        }

        is_valid
    }
}

impl<P> SchemaParser for ResponseCollectionParser<P>
where
    P: SchemaParser<Output = MockResponse>,
{
    type Output = MockResponseCollection;

    fn parse(
        &self,
        specification: &SpecificationAccessor,
        pointer: &SpecificationPointer,
    ) -> Result<MockResponseCollection, SpecificationError> {
        let mut responses = MockResponseCollection::new();

        // The caller has already established that a responses object exists
        // here; anything else iterates as empty.
        let Some(response_schemas) = specification.schema(pointer).and_then(Value::as_object)
        else {
            return Ok(responses);
        };

        for (status_key, response_specification) in response_schemas {
            let response_pointer = pointer.with_path_element(status_key);
            if !self.validate_response(status_key, response_specification, &response_pointer) {
                continue;
            }

            let mut response = self.resolving_parser.resolve_and_parse(
                specification,
                &response_pointer,
                &self.response_parser,
            )?;
            let status_code = normalize_status_code(status_key);
            response.status_code = status_code;
            responses.set(status_code, response);

            debug!(
                path = %response_pointer,
                "response with status code \"{status_code}\" was parsed",
            );
        }

        Ok(responses)
    }
}

// Canonical decimal only: "0", "007" and "+200" are rejected, so the
// default sentinel can never collide with a numeric key.
fn is_integer_status_key(status_key: &str) -> bool {
    !status_key.starts_with('0')
        && status_key.bytes().all(|b| b.is_ascii_digit())
        && status_key.parse::<u16>().is_ok()
}

// Called only after validation has restricted the key to integers and the
// "default" literal; the non-numeric case is exactly the default slot.
fn normalize_status_code(status_key: &str) -> u16 {
    status_key
        .parse()
        .unwrap_or(MockResponse::DEFAULT_STATUS_CODE)
}
