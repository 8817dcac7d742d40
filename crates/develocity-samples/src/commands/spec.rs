//! The `spec` sample: downloads the API specification document.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use develocity_api::spec::{DEFAULT_API_MANUAL_URL, DEFAULT_API_VERSION, SpecSource};

use crate::deps::UserInterface;

#[derive(Debug, clap::Args)]
pub struct SpecArgs {
    /// Path to a local specification file to use instead of downloading
    #[arg(long, env = "DEVELOCITY_API_SPEC_FILE")]
    pub spec_file: Option<PathBuf>,

    /// Base URL of the published API manual the specification is downloaded
    /// from
    #[arg(long, env = "DEVELOCITY_API_MANUAL_URL", default_value = DEFAULT_API_MANUAL_URL)]
    pub api_manual_url: String,

    /// Develocity version to download the specification for
    #[arg(long, default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// File to write the specification document to
    #[arg(short, long, default_value = "develocity-api.yaml")]
    pub output: PathBuf,
}

pub async fn execute(args: SpecArgs, ui: Arc<dyn UserInterface>) -> Result<()> {
    let source = SpecSource::resolve(args.spec_file, &args.api_manual_url, &args.api_version);

    let document = source.fetch().await.with_context(|| {
        format!(
            "failed to retrieve the API specification from {}",
            source.location()
        )
    })?;

    fs::write(&args.output, &document)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    ui.print(&format!(
        "Wrote API specification from {} to {} ({} bytes)",
        source.location(),
        args.output.display(),
        document.len()
    ));
    Ok(())
}
