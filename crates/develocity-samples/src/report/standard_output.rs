use chrono::{DateTime, FixedOffset};

use crate::deps::UserInterface;
use crate::report::{
    MAX_BUILD_SCAN_IDS_TO_SHOW, TestContainerWithCases, build_scan_link,
    outcome_distribution_display, tests_dashboard_link, unstable_build_scan_ids,
    work_unit_display,
};

/// Prints the unstable containers report to the user interface.
pub struct StandardOutputReporter {
    server_url: String,
    now: DateTime<FixedOffset>,
    containers: Vec<TestContainerWithCases>,
}

impl StandardOutputReporter {
    pub fn new(
        server_url: String,
        now: DateTime<FixedOffset>,
        containers: Vec<TestContainerWithCases>,
    ) -> Self {
        Self {
            server_url,
            now,
            containers,
        }
    }

    pub fn report(&self, ui: &dyn UserInterface) {
        for container_with_cases in &self.containers {
            let container = &container_with_cases.container;

            ui.print("");
            ui.print(&format!(
                "{} ({})",
                container.name,
                outcome_distribution_display(&container.outcome_distribution)
            ));
            ui.print(&format!(
                "\tView in Tests dashboard: {}",
                tests_dashboard_link(&self.server_url, self.now, container)
            ));

            ui.print("\tUnstable test cases:");
            for test_case in &container_with_cases.cases {
                ui.print(&format!(
                    "\t\t{} ({})",
                    test_case.name,
                    outcome_distribution_display(&test_case.outcome_distribution)
                ));
            }

            ui.print("\tWork units:");
            for work_unit in container.work_units.iter().flatten() {
                ui.print(&format!("\t\t{}", work_unit_display(work_unit)));
            }

            ui.print("\tExample Build Scans:");
            let scan_ids = unstable_build_scan_ids(container);
            for build_scan_id in scan_ids.iter().take(MAX_BUILD_SCAN_IDS_TO_SHOW) {
                ui.print(&format!(
                    "\t\t{}",
                    build_scan_link(&self.server_url, build_scan_id)
                ));
            }
            if scan_ids.len() > MAX_BUILD_SCAN_IDS_TO_SHOW {
                ui.print(&format!(
                    "\t\t+{} more",
                    scan_ids.len() - MAX_BUILD_SCAN_IDS_TO_SHOW
                ));
            }
        }
    }
}
