use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Build, BuildQuery, BuildsQuery, GradleAttributes, GradleBuildCachePerformance,
    MavenAttributes, MavenBuildCachePerformance, TestCasesQuery, TestContainersQuery,
    TestsResponse,
};
use crate::problem;

/// Default timeout applied to API requests.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Configuration for a [`DevelocityApi`] client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Address of the Develocity server
    pub server_url: String,
    /// Bearer access key, sent on every request when present
    pub access_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Creates a configuration for the given server with the default timeout.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            access_key: None,
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }

    /// Sets the bearer access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }
}

/// Client for the Develocity API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DevelocityApi {
    http: reqwest::Client,
    server_url: String,
}

impl DevelocityApi {
    /// Creates a client from the given configuration. The access key, when
    /// present, is installed as a default `Authorization` header.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(access_key) = &config.access_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {access_key}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            server_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Address of the Develocity server this client talks to, without a
    /// trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Lists builds matching the given query.
    pub async fn get_builds(&self, query: &BuildsQuery) -> Result<Vec<Build>, ApiError> {
        self.get_json("/api/builds", &query.to_query_pairs()).await
    }

    /// Fetches the attributes of a Gradle build.
    pub async fn get_gradle_attributes(
        &self,
        build_id: &str,
        query: &BuildQuery,
    ) -> Result<GradleAttributes, ApiError> {
        self.get_json(
            &format!("/api/builds/{build_id}/gradle-attributes"),
            &query.to_query_pairs(),
        )
        .await
    }

    /// Fetches the attributes of a Maven build.
    pub async fn get_maven_attributes(
        &self,
        build_id: &str,
        query: &BuildQuery,
    ) -> Result<MavenAttributes, ApiError> {
        self.get_json(
            &format!("/api/builds/{build_id}/maven-attributes"),
            &query.to_query_pairs(),
        )
        .await
    }

    /// Fetches the build cache performance model of a Gradle build.
    pub async fn get_gradle_build_cache_performance(
        &self,
        build_id: &str,
        query: &BuildQuery,
    ) -> Result<GradleBuildCachePerformance, ApiError> {
        self.get_json(
            &format!("/api/builds/{build_id}/gradle-build-cache-performance"),
            &query.to_query_pairs(),
        )
        .await
    }

    /// Fetches the build cache performance model of a Maven build.
    pub async fn get_maven_build_cache_performance(
        &self,
        build_id: &str,
        query: &BuildQuery,
    ) -> Result<MavenBuildCachePerformance, ApiError> {
        self.get_json(
            &format!("/api/builds/{build_id}/maven-build-cache-performance"),
            &query.to_query_pairs(),
        )
        .await
    }

    /// Lists test containers matching the given query.
    pub async fn get_test_containers(
        &self,
        query: &TestContainersQuery,
    ) -> Result<TestsResponse, ApiError> {
        self.get_json("/api/tests/containers", &query.to_query_pairs())
            .await
    }

    /// Lists test cases matching the given query.
    pub async fn get_test_cases(&self, query: &TestCasesQuery) -> Result<TestsResponse, ApiError> {
        self.get_json("/api/tests/cases", &query.to_query_pairs())
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.server_url);
        tracing::debug!(%url, "sending API request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%url, %status, "API request failed");

        Err(ApiError::Status {
            status,
            problem: problem::maybe_parse(&content_type, &body),
            body,
        })
    }
}
