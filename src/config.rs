use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants::defaults;
use crate::error::{Result, WayscanError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for HTTP requests (CDX query and probes)
    pub timeout: Option<u64>,

    /// Number of concurrent probe workers
    pub concurrency: Option<usize>,

    /// Include subdomains in the CDX query pattern
    pub include_subdomains: Option<bool>,

    /// Run the liveness probing phase
    pub check_alive: Option<bool>,

    /// Maximum number of rows fetched from the CDX index
    pub limit: Option<u64>,

    /// Output directory for report files
    pub outdir: Option<String>,

    /// HTTP status code counted as alive
    pub target_status: Option<u16>,

    /// CDX API endpoint (override for mirrors and tests)
    pub cdx_api: Option<String>,

    /// Suppress banner and progress output
    pub quiet: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(defaults::TIMEOUT_SECONDS),
            concurrency: Some(defaults::CONCURRENCY),
            include_subdomains: Some(false),
            check_alive: Some(false),
            limit: None,
            outdir: Some(defaults::OUTDIR.to_string()),
            target_status: Some(defaults::TARGET_STATUS),
            cdx_api: None,
            quiet: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(".wayscan.toml") {
            return config;
        }
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if cli_config.include_subdomains {
            self.include_subdomains = Some(true);
        }
        if cli_config.check_alive {
            self.check_alive = Some(true);
        }
        if let Some(limit) = cli_config.limit {
            self.limit = Some(limit);
        }
        if let Some(ref outdir) = cli_config.outdir {
            self.outdir = Some(outdir.clone());
        }
        if let Some(target_status) = cli_config.target_status {
            self.target_status = Some(target_status);
        }
        if let Some(ref cdx_api) = cli_config.cdx_api {
            self.cdx_api = Some(cdx_api.clone());
        }
        if cli_config.quiet {
            self.quiet = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.timeout {
            return Err(WayscanError::Config("timeout must be > 0".to_string()));
        }
        if let Some(0) = self.concurrency {
            return Err(WayscanError::Config("concurrency must be > 0".to_string()));
        }
        if let Some(ref outdir) = self.outdir
            && outdir.trim().is_empty()
        {
            return Err(WayscanError::Config("outdir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(defaults::TIMEOUT_SECONDS))
    }

    /// Worker pool size, clamped to the floor the engine guarantees.
    /// Falls back to the CPU core count when no concurrency is configured.
    pub fn worker_count(&self) -> usize {
        self.concurrency
            .unwrap_or_else(num_cpus::get)
            .max(defaults::MIN_WORKERS)
    }

    pub fn outdir(&self) -> &str {
        self.outdir.as_deref().unwrap_or(defaults::OUTDIR)
    }

    pub fn target_status(&self) -> u16 {
        self.target_status.unwrap_or(defaults::TARGET_STATUS)
    }

    pub fn cdx_api(&self) -> &str {
        self.cdx_api
            .as_deref()
            .unwrap_or(crate::constants::cdx::API_ENDPOINT)
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub concurrency: Option<usize>,
    pub include_subdomains: bool,
    pub check_alive: bool,
    pub limit: Option<u64>,
    pub outdir: Option<String>,
    pub target_status: Option<u16>,
    pub cdx_api: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
