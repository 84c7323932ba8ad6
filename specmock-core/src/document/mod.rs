use serde_json::Value;

use crate::error::DocumentError;
use crate::spec::SpecificationAccessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

/// Loads a specification document into an accessor. YAML input is normalized
/// into the same `serde_json::Value` tree as JSON input, so everything
/// downstream is format-agnostic.
pub fn parse_specification_str(
    input: &str,
    format: DocumentFormat,
) -> Result<SpecificationAccessor, DocumentError> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(input)?,
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(input)?,
        DocumentFormat::Auto => parse_auto(input)?,
    };
    Ok(SpecificationAccessor::new(document))
}

fn parse_auto(input: &str) -> Result<Value, DocumentError> {
    // Heuristic: JSON documents start with `{` or `[` after trimming. Try
    // the likelier format first and keep its error if both fail.
    let looks_like_json = {
        let trimmed = input.trim_start();
        trimmed.starts_with('{') || trimmed.starts_with('[')
    };

    if looks_like_json {
        match serde_json::from_str::<Value>(input) {
            Ok(doc) => Ok(doc),
            Err(json_err) => serde_yaml::from_str::<Value>(input)
                .map_err(|_| DocumentError::Json(json_err)),
        }
    } else {
        match serde_yaml::from_str::<Value>(input) {
            Ok(doc) => Ok(doc),
            Err(yaml_err) => serde_json::from_str::<Value>(input)
                .map_err(|_| DocumentError::Yaml(yaml_err)),
        }
    }
}
