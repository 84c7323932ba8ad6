use std::sync::Arc;

use specmock_core::{
    parse_specification_str, DocumentFormat, MockResponse, MockResponseCollection,
    ParsingErrorCollector, ParsingProblem, ReferenceError, ResponseCollectionParser, SchemaParser,
    SpecificationError, SpecificationPointer,
};

fn parse_responses(
    document: &str,
) -> (
    Result<MockResponseCollection, SpecificationError>,
    Vec<ParsingProblem>,
) {
    let accessor = parse_specification_str(document, DocumentFormat::Auto).unwrap();
    let collector = Arc::new(ParsingErrorCollector::new());
    let parser = ResponseCollectionParser::with_default_parser(collector.clone());
    let pointer = SpecificationPointer::from_segments(["responses"]);
    let result = parser.parse(&accessor, &pointer);
    (result, collector.problems())
}

#[test]
fn valid_entries_are_keyed_by_status_code() {
    let (result, problems) = parse_responses(
        r#"{
            "responses": {
                "200": { "description": "ok" },
                "404": { "description": "not found" }
            }
        }"#,
    );

    let responses = result.unwrap();
    assert_eq!(responses.status_codes().collect::<Vec<_>>(), vec![200, 404]);
    assert_eq!(responses.get(200).unwrap().status_code, 200);
    assert_eq!(responses.get(404).unwrap().status_code, 404);
    assert!(problems.is_empty());
}

#[test]
fn default_entry_maps_to_the_sentinel() {
    let (result, problems) = parse_responses(
        r#"{ "responses": { "default": { "description": "fallback" } } }"#,
    );

    let responses = result.unwrap();
    assert_eq!(responses.len(), 1);
    let default = responses.default_response().unwrap();
    assert_eq!(default.status_code, MockResponse::DEFAULT_STATUS_CODE);
    assert!(problems.is_empty());
}

#[test]
fn non_integer_status_key_is_skipped_with_a_diagnostic() {
    let (result, problems) = parse_responses(
        r#"{ "responses": { "abc": { "description": "?" } } }"#,
    );

    assert!(result.unwrap().is_empty());
    assert_eq!(
        problems,
        vec![ParsingProblem::new(
            "responses.abc",
            "Invalid status code. Must be integer or \"default\"."
        )]
    );
}

#[test]
fn zero_status_key_is_rejected_not_treated_as_default() {
    let (result, problems) = parse_responses(
        r#"{ "responses": { "0": { "description": "?" } } }"#,
    );

    assert!(result.unwrap().is_empty());
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].path, "responses.0");
}

#[test]
fn non_object_entry_is_skipped_with_a_diagnostic() {
    let (result, problems) = parse_responses(
        r#"{ "responses": { "200": "not-an-object" } }"#,
    );

    assert!(result.unwrap().is_empty());
    assert_eq!(
        problems,
        vec![ParsingProblem::new(
            "responses.200",
            "Invalid response specification."
        )]
    );
}

#[test]
fn key_and_shape_checks_are_independent() {
    // Valid key, scalar value: shape diagnostic only (scenario of spec
    // interest: {200: 5}).
    let (result, problems) = parse_responses(r#"{ "responses": { "200": 5 } }"#);
    assert!(result.unwrap().is_empty());
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].message, "Invalid response specification.");

    // Bad key and scalar value: both diagnostics, same location.
    let (result, problems) = parse_responses(r#"{ "responses": { "abc": 5 } }"#);
    assert!(result.unwrap().is_empty());
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().all(|p| p.path == "responses.abc"));
}

#[test]
fn invalid_sibling_does_not_block_valid_entries() {
    let (result, problems) = parse_responses(
        r#"{
            "responses": {
                "abc": { "description": "?" },
                "200": { "description": "ok" },
                "201": null
            }
        }"#,
    );

    let responses = result.unwrap();
    assert_eq!(responses.status_codes().collect::<Vec<_>>(), vec![200]);
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].path, "responses.abc");
    assert_eq!(problems[1].path, "responses.201");
}

#[test]
fn references_are_resolved_before_parsing() {
    let (result, problems) = parse_responses(
        r##"{
            "responses": {
                "404": { "$ref": "#/components/responses/NotFound" }
            },
            "components": {
                "responses": {
                    "NotFound": {
                        "content": {
                            "application/json": { "schema": { "type": "object" } }
                        }
                    }
                }
            }
        }"##,
    );

    let responses = result.unwrap();
    let not_found = responses.get(404).unwrap();
    assert_eq!(not_found.status_code, 404);
    assert!(not_found.content.contains_key("application/json"));
    assert!(problems.is_empty());
}

#[test]
fn dangling_reference_aborts_the_whole_call() {
    let (result, _) = parse_responses(
        r##"{
            "responses": {
                "200": { "description": "ok" },
                "500": { "$ref": "#/components/responses/Missing" }
            }
        }"##,
    );

    // The valid 200 entry is not separately recoverable: the call yields no
    // collection at all.
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SpecificationError::Reference(ReferenceError::NotFound(_))
    ));
}

#[test]
fn parser_failure_on_a_well_formed_entry_propagates() {
    let (result, _) = parse_responses(
        r#"{
            "responses": {
                "200": { "description": "ok" },
                "500": { "content": "not-an-object" }
            }
        }"#,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, SpecificationError::Schema { .. }));
}

#[test]
fn empty_responses_object_is_a_legal_empty_collection() {
    let (result, problems) = parse_responses(r#"{ "responses": {} }"#);
    assert!(result.unwrap().is_empty());
    assert!(problems.is_empty());
}

#[test]
fn parsing_twice_yields_identical_collections() {
    let document = r#"{
        "responses": {
            "200": { "content": { "application/json": { "schema": { "type": "string" } } } },
            "default": { "description": "fallback" }
        }
    }"#;

    let (first, _) = parse_responses(document);
    let (second, _) = parse_responses(document);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn yaml_and_json_documents_parse_identically() {
    let json = r#"{
        "responses": {
            "200": { "content": { "application/json": { "schema": { "type": "object" } } } },
            "default": { "description": "fallback" }
        }
    }"#;
    let yaml = r#"
responses:
  "200":
    content:
      application/json:
        schema:
          type: object
  default:
    description: fallback
"#;

    let (from_json, _) = parse_responses(json);
    let (from_yaml, _) = parse_responses(yaml);
    assert_eq!(from_json.unwrap(), from_yaml.unwrap());
}
