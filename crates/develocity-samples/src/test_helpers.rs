//! Shared test doubles and sample data.

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;

use crate::deps::{ProcessExecutor, ProcessOutput, UserInterface};

/// UI capturing everything printed, for assertions.
#[derive(Default)]
pub struct TestUserInterface {
    messages: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl TestUserInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed_lines(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn printed(&self) -> String {
        self.printed_lines().join("\n")
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl UserInterface for TestUserInterface {
    fn print(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn print_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Executor recording invocations instead of spawning processes.
pub struct MockProcessExecutor {
    commands: Mutex<Vec<(String, Vec<String>)>>,
    success: bool,
}

impl MockProcessExecutor {
    pub fn new() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            success: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            success: false,
        }
    }

    pub fn executed_commands(&self) -> Vec<(String, Vec<String>)> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessExecutor for MockProcessExecutor {
    fn execute(
        &self,
        command: &str,
        args: &[&str],
        _working_dir: Option<&Path>,
    ) -> Result<ProcessOutput> {
        self.commands.lock().unwrap().push((
            command.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
        ));
        Ok(ProcessOutput {
            success: self.success,
            stdout: String::new(),
            stderr: if self.success {
                String::new()
            } else {
                "gh exploded".to_string()
            },
        })
    }
}

/// Sample API payloads used across the reporter tests.
pub mod sample {
    use develocity_api::models::{
        BuildScanIdsByOutcome, GradleWorkUnit, TestOrContainer, TestOutcomeDistribution,
        TestWorkUnit,
    };

    pub fn unstable_container() -> TestOrContainer {
        TestOrContainer {
            name: "org.example.TestContainer".to_string(),
            outcome_distribution: TestOutcomeDistribution {
                total: 5,
                failed: 1,
                flaky: 2,
                ..Default::default()
            },
            work_units: Some(vec![gradle_work_unit()]),
            build_scan_ids_by_outcome: Some(BuildScanIdsByOutcome {
                failed: vec!["123".to_string()],
                flaky: vec!["456".to_string(), "789".to_string()],
            }),
        }
    }

    pub fn container_with_many_unstable_scans() -> TestOrContainer {
        TestOrContainer {
            name: "org.example.TestContainer".to_string(),
            outcome_distribution: TestOutcomeDistribution {
                total: 10,
                failed: 10,
                flaky: 0,
                ..Default::default()
            },
            work_units: Some(vec![gradle_work_unit()]),
            build_scan_ids_by_outcome: Some(BuildScanIdsByOutcome {
                failed: (1..=10).map(|n| n.to_string()).collect(),
                flaky: Vec::new(),
            }),
        }
    }

    pub fn unstable_test_case() -> TestOrContainer {
        TestOrContainer {
            name: "someTest".to_string(),
            outcome_distribution: TestOutcomeDistribution {
                total: 10,
                failed: 2,
                flaky: 4,
                ..Default::default()
            },
            work_units: None,
            build_scan_ids_by_outcome: None,
        }
    }

    fn gradle_work_unit() -> TestWorkUnit {
        TestWorkUnit {
            gradle: Some(GradleWorkUnit {
                project_name: "project".to_string(),
                task_path: ":test".to_string(),
            }),
            ..Default::default()
        }
    }
}
