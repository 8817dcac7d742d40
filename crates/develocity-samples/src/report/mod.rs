//! Reporters for unstable test containers.

use chrono::{DateTime, Duration, FixedOffset};
use develocity_api::models::{TestOrContainer, TestOutcomeDistribution, TestWorkUnit};

pub mod github_cli;
pub mod standard_output;


pub use github_cli::GitHubCliReporter;
pub use standard_output::StandardOutputReporter;

/// How many example Build Scan links a report shows per container.
pub const MAX_BUILD_SCAN_IDS_TO_SHOW: usize = 5;

/// An unstable test container together with its unstable test cases.
#[derive(Debug)]
pub struct TestContainerWithCases {
    pub container: TestOrContainer,
    pub cases: Vec<TestOrContainer>,
}

pub fn outcome_distribution_display(distribution: &TestOutcomeDistribution) -> String {
    format!(
        "🔴 failed: {}, 🟡 flaky: {}, 💯 total: {}",
        distribution.failed, distribution.flaky, distribution.total
    )
}

/// Build Scan IDs in which the container was unstable, failed ones first.
pub fn unstable_build_scan_ids(container: &TestOrContainer) -> Vec<String> {
    let Some(by_outcome) = &container.build_scan_ids_by_outcome else {
        return Vec::new();
    };
    by_outcome
        .failed
        .iter()
        .chain(by_outcome.flaky.iter())
        .cloned()
        .collect()
}

pub fn build_scan_link(server_url: &str, build_scan_id: &str) -> String {
    format!("{server_url}/s/{build_scan_id}")
}

/// Link into the Tests dashboard, scoped to the container and the last week.
pub fn tests_dashboard_link(
    server_url: &str,
    now: DateTime<FixedOffset>,
    container: &TestOrContainer,
) -> String {
    format!(
        "{}/scans/tests?search.startTimeMax={}&search.startTimeMin={}&tests.container={}",
        server_url,
        now.timestamp_millis(),
        (now - Duration::days(7)).timestamp_millis(),
        container.name
    )
}

/// Display name of the work unit that executed a container.
pub fn work_unit_display(work_unit: &TestWorkUnit) -> String {
    if let Some(gradle) = &work_unit.gradle {
        format!("{} > {}", gradle.project_name, gradle.task_path)
    } else if let Some(maven) = &work_unit.maven {
        format!(
            "{}:{}:{}@{}",
            maven.group_id, maven.artifact_id, maven.goal_name, maven.execution_id
        )
    } else if let Some(bazel) = &work_unit.bazel {
        format!("{} {}", bazel.package_name, bazel.target_name)
    } else {
        "unknown work unit".to_string()
    }
}
