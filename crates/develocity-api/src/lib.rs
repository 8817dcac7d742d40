//! Typed client for the Develocity API
//!
//! This crate covers the API surface the sample programs exercise: listing
//! builds, fetching per-build attributes and build cache performance for
//! Gradle and Maven builds, and querying test containers and test cases.
//! It also resolves and downloads the OpenAPI specification document the
//! API is described by.

/// API client and its configuration
pub mod client;
/// Error types for API calls
pub mod error;
/// Request and response models
pub mod models;
/// RFC 7807 problem payloads returned by the API on failures
pub mod problem;
/// Resolution and retrieval of the API specification document
pub mod spec;

pub use client::{ApiClientConfig, DevelocityApi, DEFAULT_API_TIMEOUT_SECS};
pub use error::ApiError;
pub use problem::ApiProblem;

// Status codes appear in the public error type.
pub use reqwest::StatusCode;
