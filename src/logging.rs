use crate::config::Config;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, target: &str) {
    let timeout = config.timeout.unwrap_or(60);
    let workers = config.worker_count();
    let include_subdomains = config.include_subdomains.unwrap_or(false);
    let check_alive = config.check_alive.unwrap_or(false);

    info!("Target: {target} (subdomains: {include_subdomains})");
    info!("Configuration: workers={workers}, timeout={timeout}s, check_alive={check_alive}");
    if let Some(limit) = config.limit {
        info!("CDX row limit: {limit}");
    }
}

/// Log URL collection results
pub fn log_url_collection(unique_urls: usize) {
    info!("Collected {unique_urls} unique archived URLs");
}

/// Log probing start
pub fn log_probe_start(url_count: usize, workers: usize) {
    info!("Probing {url_count} URLs with {workers} workers");
}

/// Log probing completion
pub fn log_probe_complete(completed: usize, matched: usize, duration_ms: u128) {
    if matched > 0 {
        info!("Probing complete: {matched}/{completed} URLs alive ({duration_ms}ms)");
    } else {
        warn!("Probing complete: no live URLs out of {completed} ({duration_ms}ms)");
    }
}

/// Log individual probe results for debugging
pub fn log_probe_result(url: &str, status: Option<u16>, reason: Option<&str>) {
    match (status, reason) {
        (Some(status), _) => debug!("✓ {url} -> {status}"),
        (None, Some(reason)) => debug!("✗ {url} -> {reason}"),
        (None, None) => debug!("? {url} -> unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_helpers_dont_panic_without_logger() {
        let config = Config::default();
        log_config_info(&config, "example.com");
        log_url_collection(10);
        log_probe_start(10, 4);
        log_probe_complete(10, 3, 1500);
        log_probe_result("http://a", Some(200), None);
        log_probe_result("http://b", None, Some("timeout"));
    }
}
