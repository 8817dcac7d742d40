//! Resolution and retrieval of the API specification document.
//!
//! The specification lives either in a local file, or in the versioned API
//! manual published with every Develocity release. A local file, when given,
//! is used verbatim; otherwise the download URL is formed from the manual
//! base URL and the Develocity version.

use std::fs;
use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Base URL of the published API manual.
pub const DEFAULT_API_MANUAL_URL: &str = "https://docs.gradle.com/enterprise/api-manual/ref/";

/// Develocity version the specification is resolved for. Must be 2022.1 or
/// later; earlier versions did not publish a specification document.
pub const DEFAULT_API_VERSION: &str = "2025.2";

/// Error raised while resolving or fetching the specification document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Neither a readable local file nor an existing remote resource.
    #[error("specification not found at {location}")]
    NotFound {
        /// The file path or URL that was tried
        location: String,
    },

    /// A local specification file could not be read.
    #[error("failed to read specification from {location}")]
    Io {
        /// The file path that was tried
        location: String,
        #[source]
        source: io::Error,
    },

    /// The server answered the download with an unexpected status.
    #[error("failed to fetch specification from {location}: status {status}")]
    Status {
        /// The URL that was tried
        location: String,
        /// HTTP status code of the response
        status: StatusCode,
    },

    /// The download never produced a response.
    #[error("failed to fetch specification")]
    Http(#[from] reqwest::Error),
}

/// A resolved location of the API specification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// A local file, used verbatim
    File(PathBuf),
    /// A URL into the published API manual
    Remote(String),
}

impl SpecSource {
    /// Resolves the specification location. A local file override wins;
    /// otherwise the download URL is the manual base URL followed by
    /// `develocity-{version}-api.yaml`.
    pub fn resolve(file_override: Option<PathBuf>, base_url: &str, version: &str) -> Self {
        match file_override {
            Some(path) => Self::File(path),
            None => Self::Remote(format!("{base_url}develocity-{version}-api.yaml")),
        }
    }

    /// The location as a displayable string.
    pub fn location(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }

    /// Retrieves the specification document from this location.
    pub async fn fetch(&self) -> Result<String, SpecError> {
        match self {
            Self::File(path) => fs::read_to_string(path).map_err(|source| {
                let location = path.display().to_string();
                if source.kind() == io::ErrorKind::NotFound {
                    SpecError::NotFound { location }
                } else {
                    SpecError::Io { location, source }
                }
            }),
            Self::Remote(url) => {
                tracing::debug!(%url, "downloading API specification");
                let response = reqwest::get(url).await?;
                let status = response.status();
                if status.is_success() {
                    Ok(response.text().await?)
                } else if status == StatusCode::NOT_FOUND {
                    Err(SpecError::NotFound {
                        location: url.clone(),
                    })
                } else {
                    Err(SpecError::Status {
                        location: url.clone(),
                        status,
                    })
                }
            }
        }
    }
}
