//! Helpers for composing advanced builds search queries.

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// A closed time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl Interval {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }
}

/// Formats a timestamp the way the builds query language expects it,
/// second precision with the offset preserved.
pub fn format_timestamp(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Condition matching builds that started within the given range.
pub fn builds_between(interval: &Interval) -> String {
    format!(
        "buildStartTime:[{} to {}]",
        format_timestamp(interval.start()),
        format_timestamp(interval.end())
    )
}

/// Condition matching builds that started at or after the given instant.
pub fn builds_since(start: DateTime<FixedOffset>) -> String {
    format!("buildStartTime>={}", format_timestamp(start))
}

/// Condition matching builds of the given project.
pub fn project_name_equals(project_name: &str) -> String {
    format!("project:{project_name}")
}

/// Combines two conditions so both must hold.
pub fn and(left: &str, right: &str) -> String {
    format!("{left} and {right}")
}
