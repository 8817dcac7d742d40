//! Shared command-line arguments for constructing the API client.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use develocity_api::{ApiClientConfig, DevelocityApi};

/// Environment variable carrying the access key directly, used when no key
/// file is given.
pub const ACCESS_KEY_ENV_VAR: &str = "DEVELOCITY_ACCESS_KEY";

#[derive(Debug, clap::Args)]
pub struct ApiProviderArgs {
    /// The address of the Develocity server
    #[arg(long, env = "DEVELOCITY_SERVER_URL")]
    pub server_url: String,

    /// The path to the file containing the access key
    #[arg(long, env = "DEVELOCITY_ACCESS_KEY_FILE")]
    pub access_key_file: Option<PathBuf>,
}

impl ApiProviderArgs {
    /// The server address without a trailing slash.
    pub fn server_url(&self) -> String {
        self.server_url.trim_end_matches('/').to_string()
    }

    /// Constructs an authenticated API client.
    pub fn create(&self) -> Result<DevelocityApi> {
        let access_key = self.access_key()?;
        let config = ApiClientConfig::new(self.server_url()).with_access_key(access_key);
        DevelocityApi::new(config).context("failed to construct the API client")
    }

    /// The access key: the first line of the key file when one is given,
    /// the environment variable otherwise.
    fn access_key(&self) -> Result<String> {
        if let Some(path) = &self.access_key_file {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read access key file {}", path.display()))?;
            return contents
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .with_context(|| format!("access key file {} is empty", path.display()));
        }

        std::env::var(ACCESS_KEY_ENV_VAR).ok().context(
            "an access key is required: pass --access-key-file or set DEVELOCITY_ACCESS_KEY",
        )
    }
}
