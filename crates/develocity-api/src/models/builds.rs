use serde::{Deserialize, Serialize};

/// A single build known to the Develocity server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Build Scan ID
    pub id: String,
    /// Instant the build became available on the server, in epoch milliseconds
    pub available_at: i64,
    /// Build tool that produced the build, e.g. `gradle` or `maven`
    pub build_tool_type: String,
    /// Version of the build tool, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_tool_version: Option<String>,
}

/// Query for the builds listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildsQuery {
    /// Lower bound of the query as an epoch-millisecond instant, applied to
    /// the first page only
    pub from_instant: Option<i64>,
    /// Build ID to continue a query from, exclusive
    pub from_build: Option<String>,
    /// Whether builds are returned from most to least recent
    pub reverse: bool,
    /// Maximum number of builds returned by a single query
    pub max_builds: u32,
    /// Maximum number of seconds a query waits before returning with the
    /// builds processed so far
    pub max_wait_secs: u32,
    /// Advanced search query as accepted by the Builds dashboard
    pub query: Option<String>,
}

impl Default for BuildsQuery {
    fn default() -> Self {
        Self {
            from_instant: None,
            from_build: None,
            reverse: false,
            max_builds: 100,
            max_wait_secs: 3,
            query: None,
        }
    }
}

impl BuildsQuery {
    /// Renders this query as URL query parameters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from_instant) = self.from_instant {
            pairs.push(("fromInstant", from_instant.to_string()));
        }
        if let Some(from_build) = &self.from_build {
            pairs.push(("fromBuild", from_build.clone()));
        }
        pairs.push(("reverse", self.reverse.to_string()));
        pairs.push(("maxBuilds", self.max_builds.to_string()));
        pairs.push(("maxWaitSecs", self.max_wait_secs.to_string()));
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}

/// Query for the single-build model endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildQuery {
    /// Seconds to wait for the requested model to become available before
    /// the server answers with a not-ready status
    pub availability_wait_timeout_secs: Option<u32>,
}

impl BuildQuery {
    /// Renders this query as URL query parameters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        match self.availability_wait_timeout_secs {
            Some(secs) => vec![("availabilityWaitTimeoutSecs", secs.to_string())],
            None => Vec::new(),
        }
    }
}

/// Environment a build ran in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEnvironment {
    /// Username reported by the build agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Attributes of a Gradle build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleAttributes {
    /// Name of the root project
    pub root_project_name: String,
    /// Wall-clock duration of the build in milliseconds
    pub build_duration: i64,
    /// Environment the build ran in
    #[serde(default)]
    pub environment: BuildEnvironment,
}

/// Attributes of a Maven build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenAttributes {
    /// Name of the top-level project
    pub top_level_project_name: String,
    /// Wall-clock duration of the build in milliseconds
    pub build_duration: i64,
    /// Environment the build ran in
    #[serde(default)]
    pub environment: BuildEnvironment,
}

/// Summary of work avoided through the build cache and incrementalism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvoidanceSavingsSummary {
    /// Estimated ratio of avoided execution time to potential serial
    /// execution time
    pub ratio: f64,
}

/// How a Gradle task execution was, or was not, avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradleAvoidanceOutcome {
    AvoidedUpToDate,
    AvoidedFromLocalCache,
    AvoidedFromRemoteCache,
    ExecutedCacheable,
    ExecutedNotCacheable,
    Lifecycle,
    Skipped,
    /// Outcome introduced by a newer server version
    #[serde(other)]
    Unknown,
}

/// A single task execution in a Gradle build cache performance model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleTaskExecution {
    /// Path of the executed task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_path: Option<String>,
    /// Avoidance outcome of the execution
    pub avoidance_outcome: GradleAvoidanceOutcome,
}

impl GradleTaskExecution {
    /// Whether this execution was served from a build cache.
    pub fn is_cache_hit(&self) -> bool {
        matches!(
            self.avoidance_outcome,
            GradleAvoidanceOutcome::AvoidedFromLocalCache
                | GradleAvoidanceOutcome::AvoidedFromRemoteCache
        )
    }
}

/// Build cache performance model of a Gradle build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleBuildCachePerformance {
    /// Avoidance savings summary of the build
    pub avoidance_savings_summary: AvoidanceSavingsSummary,
    /// All task executions of the build
    #[serde(default)]
    pub task_execution: Vec<GradleTaskExecution>,
}

/// How a Maven goal execution was, or was not, avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MavenAvoidanceOutcome {
    AvoidedFromLocalCache,
    AvoidedFromRemoteCache,
    ExecutedCacheable,
    ExecutedNotCacheable,
    /// Outcome introduced by a newer server version
    #[serde(other)]
    Unknown,
}

/// A single goal execution in a Maven build cache performance model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenGoalExecution {
    /// Name of the executed goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    /// Avoidance outcome of the execution
    pub avoidance_outcome: MavenAvoidanceOutcome,
}

impl MavenGoalExecution {
    /// Whether this execution was served from a build cache.
    pub fn is_cache_hit(&self) -> bool {
        matches!(
            self.avoidance_outcome,
            MavenAvoidanceOutcome::AvoidedFromLocalCache
                | MavenAvoidanceOutcome::AvoidedFromRemoteCache
        )
    }
}

/// Build cache performance model of a Maven build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenBuildCachePerformance {
    /// Avoidance savings summary of the build
    pub avoidance_savings_summary: AvoidanceSavingsSummary,
    /// All goal executions of the build
    #[serde(default)]
    pub goal_execution: Vec<MavenGoalExecution>,
}
