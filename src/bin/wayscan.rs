use clap::Parser;

use wayscan::classify::{RuleTables, categorize};
use wayscan::cli::{Cli, cli_to_config};
use wayscan::config::Config;
use wayscan::constants::USER_AGENT;
use wayscan::error::Result;
use wayscan::output;
use wayscan::prober::{CheckAlive, Prober};
use wayscan::progress::{ConsoleProgress, ProgressSink, SilentProgress};
use wayscan::wayback;
use wayscan::{banner, logging};

use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_wayscan_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main recon logic extracted from main() for testing
async fn run_wayscan_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(cli, &cli_config)?;

    let quiet = config.quiet.unwrap_or(false);
    logging::init_logger(config.verbose.unwrap_or(false), quiet);

    if !quiet {
        banner::print_banner();
    }

    let target = wayback::validate_target(&cli.target)?;
    logging::log_config_info(&config, &target);

    if !quiet {
        println!("[+] Target: {target}");
        println!("[*] Fetching Wayback URLs (collapse=urlkey)...");
    }

    let client = reqwest::Client::builder()
        .timeout(config.timeout_duration())
        .user_agent(USER_AGENT)
        .build()?;

    let urls = wayback::fetch_archived_urls(&client, &target, &config).await?;
    if urls.is_empty() {
        eprintln!("[!] No URLs collected. Exiting.");
        return Ok(1);
    }
    logging::log_url_collection(urls.len());
    if !quiet {
        println!("[+] Collected {} unique URLs", urls.len());
    }

    let tables = RuleTables::default();
    let categorized = categorize(&urls, &tables);

    let outdir = Path::new(config.outdir());
    let reports = output::write_category_reports(outdir, &target, &categorized, &urls)?;
    if !quiet {
        output::print_summary(&reports);
    }

    if config.check_alive.unwrap_or(false) {
        let workers = config.worker_count();
        logging::log_probe_start(urls.len(), workers);
        if !quiet {
            println!(
                "\n[*] Running liveness checks with {workers} workers (active probes, may take a while)..."
            );
        }

        let sink: Box<dyn ProgressSink> = if quiet {
            Box::new(SilentProgress)
        } else {
            Box::new(ConsoleProgress::new(urls.len()))
        };

        let started = std::time::Instant::now();
        let report = Prober::default().check_alive(urls, &config, sink.as_ref()).await?;
        logging::log_probe_complete(report.completed, report.matched, started.elapsed().as_millis());

        let alive_report = output::write_alive_report(
            outdir,
            &target,
            config.target_status(),
            &report.alive,
        )?;
        if !quiet {
            output::print_summary(std::slice::from_ref(&alive_report));
        }
    }

    if !quiet {
        println!("\n[+] Done. All category files produced in the output directory.");
    }
    Ok(0)
}

/// Load the file-based config honoring --config/--no-config, then overlay
/// CLI arguments and validate the result.
fn load_and_merge_config(cli: &Cli, cli_config: &wayscan::CliConfig) -> Result<Config> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(ref path) = cli.config {
        Config::load_from_file(path)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
