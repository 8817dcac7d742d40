use serde::{Deserialize, Serialize};

/// Outcome of a test or test container execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestOutcome {
    Passed,
    Failed,
    Skipped,
    Flaky,
    NotSelected,
}

impl TestOutcome {
    /// Wire spelling of the outcome, as used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Flaky => "flaky",
            Self::NotSelected => "notSelected",
        }
    }
}

/// Optional response fields that have to be requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestIncludeFields {
    BuildScanIds,
    WorkUnits,
}

impl TestIncludeFields {
    /// Wire spelling of the field, as used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuildScanIds => "buildScanIds",
            Self::WorkUnits => "workUnits",
        }
    }
}

/// Query for the test containers endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestContainersQuery {
    /// Advanced search query restricting the builds the containers ran in
    pub query: Option<String>,
    /// Outcomes a container must have at least one of
    pub test_outcomes: Vec<TestOutcome>,
    /// Optional response fields to include
    pub include: Vec<TestIncludeFields>,
}

impl TestContainersQuery {
    /// Renders this query as URL query parameters. List parameters repeat
    /// the key once per value.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        for outcome in &self.test_outcomes {
            pairs.push(("testOutcomes", outcome.as_str().to_string()));
        }
        for field in &self.include {
            pairs.push(("include", field.as_str().to_string()));
        }
        pairs
    }
}

/// Query for the test cases endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCasesQuery {
    /// Name of the container to list the cases of
    pub container: String,
    /// Advanced search query restricting the builds the cases ran in
    pub query: Option<String>,
    /// Outcomes a case must have at least one of
    pub test_outcomes: Vec<TestOutcome>,
    /// Optional response fields to include
    pub include: Vec<TestIncludeFields>,
}

impl TestCasesQuery {
    /// Renders this query as URL query parameters. List parameters repeat
    /// the key once per value.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("container", self.container.clone())];
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        for outcome in &self.test_outcomes {
            pairs.push(("testOutcomes", outcome.as_str().to_string()));
        }
        for field in &self.include {
            pairs.push(("include", field.as_str().to_string()));
        }
        pairs
    }
}

/// How often each outcome occurred across the selected builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcomeDistribution {
    /// Number of executions with any outcome
    pub total: u64,
    /// Number of failed executions
    #[serde(default)]
    pub failed: u64,
    /// Number of flaky executions
    #[serde(default)]
    pub flaky: u64,
    /// Number of passed executions
    #[serde(default)]
    pub passed: u64,
    /// Number of skipped executions
    #[serde(default)]
    pub skipped: u64,
}

/// Build Scan IDs of the selected builds, grouped by test outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildScanIdsByOutcome {
    /// Scans in which the test failed
    #[serde(default)]
    pub failed: Vec<String>,
    /// Scans in which the test was flaky
    #[serde(default)]
    pub flaky: Vec<String>,
}

/// Gradle task that executed a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleWorkUnit {
    /// Name of the project the task belongs to
    pub project_name: String,
    /// Path of the task
    pub task_path: String,
}

/// Maven goal execution that executed a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenWorkUnit {
    /// Group ID of the executing project
    pub group_id: String,
    /// Artifact ID of the executing project
    pub artifact_id: String,
    /// Name of the executed goal
    pub goal_name: String,
    /// ID of the goal execution
    pub execution_id: String,
}

/// Bazel target that executed a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BazelWorkUnit {
    /// Package the target belongs to
    pub package_name: String,
    /// Name of the target
    pub target_name: String,
}

/// The unit of work that executed a test, one variant per build tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestWorkUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradle: Option<GradleWorkUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maven: Option<MavenWorkUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bazel: Option<BazelWorkUnit>,
}

/// A test case or test container with its outcome statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOrContainer {
    /// Fully qualified name
    pub name: String,
    /// Outcome statistics across the selected builds
    pub outcome_distribution: TestOutcomeDistribution,
    /// Work units that executed the test, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_units: Option<Vec<TestWorkUnit>>,
    /// Build Scan IDs grouped by outcome, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_scan_ids_by_outcome: Option<BuildScanIdsByOutcome>,
}

/// Response of the test containers and test cases endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsResponse {
    /// Matching tests or containers
    #[serde(default)]
    pub content: Vec<TestOrContainer>,
}
