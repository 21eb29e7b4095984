// Command-line interface definitions and parsing for wayscan

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target apex domain (e.g. example.com)
    pub target: String,

    // Core Options
    /// Widen the CDX query pattern to *.target/*
    #[arg(long, help_heading = "Core Options")]
    pub include_subdomains: bool,

    /// Probe every collected URL and keep those answering with the target status
    #[arg(long, help_heading = "Core Options")]
    pub alive: bool,

    /// Concurrent probe workers (default: 20)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds (default: 60)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Core Options")]
    pub timeout: Option<u64>,

    /// Maximum URLs fetched from the CDX index (recommended for large targets)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub limit: Option<u64>,

    // Output & Verbosity
    /// Output directory for report files (default: wayscan_output)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Output & Verbosity")]
    pub outdir: Option<String>,

    /// Suppress banner and progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Network
    /// HTTP status code counted as alive (default: 200)
    #[arg(long, value_name = "CODE", help_heading = "Network")]
    pub target_status: Option<u16>,

    /// Alternative CDX API endpoint
    #[arg(long, value_name = "URL", help_heading = "Network")]
    pub cdx_api: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig for merging
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        concurrency: cli.concurrency,
        include_subdomains: cli.include_subdomains,
        check_alive: cli.alive,
        limit: cli.limit,
        outdir: cli.outdir.clone(),
        target_status: cli.target_status,
        cdx_api: cli.cdx_api.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
    }
}
