//! Streaming of builds from the server and per-build cache reporting.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use develocity_api::models::{Build, BuildQuery, BuildsQuery};
use develocity_api::{ApiError, DevelocityApi};

use crate::deps::UserInterface;

/// Source of build pages, normally the API client.
#[async_trait]
pub trait BuildsSource {
    async fn builds(&self, query: &BuildsQuery) -> Result<Vec<Build>, ApiError>;
}

#[async_trait]
impl BuildsSource for DevelocityApi {
    async fn builds(&self, query: &BuildsQuery) -> Result<Vec<Build>, ApiError> {
        self.get_builds(query).await
    }
}

/// Consumer of individual builds coming out of [`BuildsProcessor`].
#[async_trait]
pub trait BuildProcessor {
    async fn process(&self, build: &Build);
}

/// Streams builds from a starting instant and hands each one to a
/// [`BuildProcessor`].
///
/// The first page is keyed by the starting instant; every later page by the
/// ID of the last build of the most recent non-empty page. In reverse mode a
/// single page is fetched. In forward mode the stream never ends: an empty
/// page simply re-issues the previous query, so the processor keeps
/// long-polling for builds as they appear on the server.
pub struct BuildsProcessor<S, P> {
    source: S,
    processor: P,
    reverse: bool,
    max_builds: u32,
    max_wait_secs: u32,
}

impl<S: BuildsSource, P: BuildProcessor> BuildsProcessor<S, P> {
    pub fn new(source: S, processor: P, reverse: bool, max_builds: u32, max_wait_secs: u32) -> Self {
        Self {
            source,
            processor,
            reverse,
            max_builds,
            max_wait_secs,
        }
    }

    pub async fn process(&self, from: DateTime<Utc>) -> Result<(), ApiError> {
        let mut from_build: Option<String> = None;

        loop {
            let mut query = BuildsQuery {
                reverse: self.reverse,
                max_builds: self.max_builds,
                max_wait_secs: self.max_wait_secs,
                ..Default::default()
            };
            match &from_build {
                Some(id) => query.from_build = Some(id.clone()),
                None => query.from_instant = Some(from.timestamp_millis()),
            }

            let builds = self.source.builds(&query).await?;
            for build in &builds {
                self.processor.process(build).await;
            }

            if self.reverse {
                return Ok(());
            }
            if let Some(last) = builds.last() {
                from_build = Some(last.id.clone());
            }
        }
    }
}

/// Reports build cache effectiveness for every Gradle and Maven build,
/// optionally restricted to a single project.
pub struct BuildCacheProcessor {
    api: DevelocityApi,
    project_name: Option<String>,
    ui: Arc<dyn UserInterface>,
}

impl BuildCacheProcessor {
    pub fn new(api: DevelocityApi, project_name: Option<String>, ui: Arc<dyn UserInterface>) -> Self {
        Self {
            api,
            project_name,
            ui,
        }
    }

    async fn process_gradle_build(&self, build: &Build) -> Result<(), ApiError> {
        let attributes = self
            .api
            .get_gradle_attributes(&build.id, &BuildQuery::default())
            .await?;
        if !self.matches_project(&attributes.root_project_name) {
            tracing::debug!(build = %build.id, "skipping build of another project");
            return Ok(());
        }

        let model = self
            .api
            .get_gradle_build_cache_performance(&build.id, &BuildQuery::default())
            .await?;
        let hits = model.task_execution.iter().filter(|t| t.is_cache_hit()).count();
        self.report_build(
            build,
            count_to_percentage(model.task_execution.len(), hits),
            ratio_to_percentage(model.avoidance_savings_summary.ratio),
            &attributes.root_project_name,
            attributes.build_duration,
            attributes.environment.username.as_deref(),
        );
        Ok(())
    }

    async fn process_maven_build(&self, build: &Build) -> Result<(), ApiError> {
        let attributes = self
            .api
            .get_maven_attributes(&build.id, &BuildQuery::default())
            .await?;
        if !self.matches_project(&attributes.top_level_project_name) {
            tracing::debug!(build = %build.id, "skipping build of another project");
            return Ok(());
        }

        let model = self
            .api
            .get_maven_build_cache_performance(&build.id, &BuildQuery::default())
            .await?;
        let hits = model.goal_execution.iter().filter(|g| g.is_cache_hit()).count();
        self.report_build(
            build,
            count_to_percentage(model.goal_execution.len(), hits),
            ratio_to_percentage(model.avoidance_savings_summary.ratio),
            &attributes.top_level_project_name,
            attributes.build_duration,
            attributes.environment.username.as_deref(),
        );
        Ok(())
    }

    fn matches_project(&self, project_name: &str) -> bool {
        match &self.project_name {
            Some(name) => name == project_name,
            None => true,
        }
    }

    fn report_build(
        &self,
        build: &Build,
        cache_hit_percentage: f64,
        avoidance_savings_ratio_percentage: f64,
        project_name: &str,
        build_duration_millis: i64,
        username: Option<&str>,
    ) {
        let available_at = DateTime::<Utc>::from_timestamp_millis(build.available_at)
            .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
            .unwrap_or_else(|| build.available_at.to_string());

        self.ui.print(&format!(
            "Build Scan | {}/s/{} | Project: {} | 🗓  {} | ⏱  {} ms\t| 👤 {}\n - \tCache hit percentage: {:.2}%\n - \tAvoidance savings ratio: {:.2}%\n",
            self.api.server_url(),
            build.id,
            project_name,
            available_at,
            build_duration_millis,
            username.unwrap_or("unknown"),
            cache_hit_percentage,
            avoidance_savings_ratio_percentage,
        ));
    }

    fn report_error(&self, build: &Build, error: &ApiError) {
        match error {
            ApiError::Status { status, body, problem } => {
                self.ui.print_error(&format!(
                    "API Error {} for Build Scan ID {}\n{}",
                    status.as_u16(),
                    build.id,
                    body
                ));
                if let Some(problem) = problem {
                    if problem.is_build_deleted() {
                        if let Some(detail) = &problem.detail {
                            self.ui.print_error(detail);
                        }
                    }
                }
            }
            other => {
                self.ui
                    .print_error(&format!("API Error for Build Scan ID {}: {other}", build.id));
            }
        }
    }
}

#[async_trait]
impl BuildProcessor for BuildCacheProcessor {
    async fn process(&self, build: &Build) {
        let result = match build.build_tool_type.as_str() {
            "gradle" => self.process_gradle_build(build).await,
            "maven" => self.process_maven_build(build).await,
            other => {
                self.ui
                    .print(&format!("Unsupported build tool type received - {other}"));
                Ok(())
            }
        };

        if let Err(error) = result {
            self.report_error(build, &error);
        }
    }
}

/// Scales a ratio to a percentage, rounded half-up to two decimals.
pub fn ratio_to_percentage(ratio: f64) -> f64 {
    round2(ratio * 100.0)
}

/// Percentage of a count over a total. The ratio is rounded to two decimals
/// before scaling, matching how the dashboard reports it.
pub fn count_to_percentage(total: usize, portion: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        ratio_to_percentage(round2(portion as f64 / total as f64))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
