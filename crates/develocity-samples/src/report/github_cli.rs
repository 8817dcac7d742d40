use anyhow::{Result, bail};
use chrono::{DateTime, FixedOffset};
use develocity_api::models::TestOrContainer;

use crate::deps::ProcessExecutor;
use crate::query::{Interval, format_timestamp};
use crate::report::{
    MAX_BUILD_SCAN_IDS_TO_SHOW, TestContainerWithCases, build_scan_link,
    outcome_distribution_display, tests_dashboard_link, unstable_build_scan_ids,
};

/// Creates a GitHub issue per unstable container through the `gh` CLI.
pub struct GitHubCliReporter {
    server_url: String,
    github_repo_url: String,
    now: DateTime<FixedOffset>,
    containers: Vec<TestContainerWithCases>,
    build_time_range: Interval,
}

impl GitHubCliReporter {
    pub fn new(
        server_url: String,
        github_repo_url: String,
        now: DateTime<FixedOffset>,
        containers: Vec<TestContainerWithCases>,
        build_time_range: Interval,
    ) -> Self {
        Self {
            server_url,
            github_repo_url,
            now,
            containers,
            build_time_range,
        }
    }

    pub fn report(&self, executor: &dyn ProcessExecutor) -> Result<()> {
        for container_with_cases in &self.containers {
            let title = issue_title(&container_with_cases.container);
            let body = self.issue_body(container_with_cases);
            let args = [
                "issue",
                "create",
                "--repo",
                self.github_repo_url.as_str(),
                "--title",
                title.as_str(),
                "--body",
                body.as_str(),
            ];

            let output = executor.execute("gh", &args, None)?;
            if !output.success {
                bail!(
                    "Failed to create GitHub issue for unstable container `{}`: {}",
                    container_with_cases.container.name,
                    output.stderr
                );
            }
        }
        Ok(())
    }

    fn issue_body(&self, container_with_cases: &TestContainerWithCases) -> String {
        let container = &container_with_cases.container;
        let cases = &container_with_cases.cases;

        let mut body = String::new();
        body.push_str("## Summary\n");
        body.push_str(&format!(
            "Previously stable test container `{}` became unstable between `{}` and `{}`.\n",
            container.name,
            format_timestamp(self.build_time_range.start()),
            format_timestamp(self.build_time_range.end())
        ));
        body.push_str(&format!(
            "[View in Tests dashboard.]({})\n",
            tests_dashboard_link(&self.server_url, self.now, container)
        ));
        body.push('\n');

        if !cases.is_empty() {
            body.push_str("### Unstable cases\n");
            for test_case in cases {
                body.push_str(&format!(
                    "* `{}` ({})\n",
                    test_case.name,
                    outcome_distribution_display(&test_case.outcome_distribution)
                ));
            }
            body.push('\n');
        }

        body.push_str("### Example Build Scans\n");
        let scan_ids = unstable_build_scan_ids(container);
        for build_scan_id in scan_ids.iter().take(MAX_BUILD_SCAN_IDS_TO_SHOW) {
            body.push_str(&format!(
                "* {}\n",
                build_scan_link(&self.server_url, build_scan_id)
            ));
        }
        if scan_ids.len() > MAX_BUILD_SCAN_IDS_TO_SHOW {
            body.push_str(&format!(
                "* +{} more\n",
                scan_ids.len() - MAX_BUILD_SCAN_IDS_TO_SHOW
            ));
        }
        body.push('\n');

        body.push_str("Powered by Develocity API: https://docs.gradle.com/enterprise/api-manual/");
        body
    }
}

fn issue_title(container: &TestOrContainer) -> String {
    format!("Investigate unstable outcomes of `{}`", container.name)
}
