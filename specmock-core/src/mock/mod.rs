use std::collections::BTreeMap;

use serde_json::Value;

/// One mocked response: the normalized status code plus the body and header
/// schemas the response parser extracted.
///
/// `status_code` is owned by the collection parser, which overwrites it with
/// the normalized key after parsing; the remaining fields are owned by the
/// response parser.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MockResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Media type → body schema.
    pub content: BTreeMap<String, Value>,
    /// Header name → header schema.
    pub headers: BTreeMap<String, Value>,
}

impl MockResponse {
    /// Reserved key for the `default` response slot. Outside the valid
    /// 100–599 status range, and a literal `"0"` key never passes
    /// validation, so this key always means `default`.
    pub const DEFAULT_STATUS_CODE: u16 = 0;
}

/// Mock responses keyed by normalized status code. Last write wins for a
/// duplicate key.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MockResponseCollection {
    responses: BTreeMap<u16, MockResponse>,
}

impl MockResponseCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, status_code: u16, response: MockResponse) {
        self.responses.insert(status_code, response);
    }

    pub fn get(&self, status_code: u16) -> Option<&MockResponse> {
        self.responses.get(&status_code)
    }

    pub fn default_response(&self) -> Option<&MockResponse> {
        self.responses.get(&MockResponse::DEFAULT_STATUS_CODE)
    }

    pub fn contains(&self, status_code: u16) -> bool {
        self.responses.contains_key(&status_code)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn status_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.responses.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &MockResponse)> {
        self.responses.iter().map(|(code, response)| (*code, response))
    }
}
