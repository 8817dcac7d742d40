use reqwest::StatusCode;
use thiserror::Error;

use crate::problem::ApiProblem;

/// Error raised by Develocity API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Develocity API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: StatusCode,
        /// Raw response body
        body: String,
        /// Parsed problem payload, when the server sent `application/problem+json`
        problem: Option<ApiProblem>,
    },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The configured access key cannot be used as a header value.
    #[error("invalid access key: {0}")]
    InvalidAccessKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// HTTP status of the failed call, if the server responded at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
            Self::InvalidAccessKey(_) => None,
        }
    }

    /// Problem payload attached to the failed call, if any.
    pub fn problem(&self) -> Option<&ApiProblem> {
        match self {
            Self::Status { problem, .. } => problem.as_ref(),
            _ => None,
        }
    }
}
