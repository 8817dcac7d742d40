//! The `builds` sample: streams builds and reports build cache performance.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};

use crate::deps::UserInterface;
use crate::processor::{BuildCacheProcessor, BuildsProcessor};
use crate::provider::ApiProviderArgs;

#[derive(Debug, clap::Args)]
pub struct BuildsArgs {
    #[command(flatten)]
    pub provider: ApiProviderArgs,

    /// The name of the project to show the builds of (if omitted, all builds
    /// are shown)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Query backward in time, from most to least recent, and stop after one
    /// page instead of tailing
    #[arg(long)]
    pub reverse: bool,

    /// The maximum number of builds to return by a single query. The number
    /// may be lower if --max-wait-secs is reached
    #[arg(long, default_value_t = 100)]
    pub max_builds: u32,

    /// The maximum number of seconds to wait until a query returns. If the
    /// query returns before --max-builds is reached, it returns with already
    /// processed builds
    #[arg(long, default_value_t = 3)]
    pub max_wait_secs: u32,
}

pub async fn execute(args: BuildsArgs, ui: Arc<dyn UserInterface>) -> Result<()> {
    let api = args.provider.create()?;

    let processor = BuildCacheProcessor::new(api.clone(), args.project_name.clone(), ui.clone());
    let builds_processor =
        BuildsProcessor::new(api, processor, args.reverse, args.max_builds, args.max_wait_secs);

    ui.print("Processing builds ...");

    let start = if args.reverse {
        Utc::now()
    } else {
        Utc::now() - Duration::minutes(15)
    };
    builds_processor
        .process(start)
        .await
        .context("failed to process builds")
}
