use serde::{Deserialize, Serialize};

/// Content type the API uses for structured error payloads.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Problem type reported when the requested Build Scan has been deleted.
pub const BUILD_DELETED_PROBLEM_TYPE: &str = "urn:gradle:enterprise:api:problems:build-deleted";

/// RFC 7807 problem details returned by the API on failed calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProblem {
    /// URN identifying the kind of problem
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    /// Short human-readable summary
    pub title: Option<String>,
    /// HTTP status code duplicated into the payload
    pub status: Option<u16>,
    /// Human-readable explanation specific to this occurrence
    pub detail: Option<String>,
}

impl ApiProblem {
    /// Whether this problem reports a deleted Build Scan.
    pub fn is_build_deleted(&self) -> bool {
        self.problem_type.as_deref() == Some(BUILD_DELETED_PROBLEM_TYPE)
    }
}

/// Parses a problem payload out of a failed response, if the response
/// declared the problem content type. A body that does not parse yields
/// `None`; the raw body is still available on the error itself.
pub fn maybe_parse(content_type: &str, body: &str) -> Option<ApiProblem> {
    if !content_type.starts_with(PROBLEM_CONTENT_TYPE) {
        return None;
    }
    serde_json::from_str(body).ok()
}
