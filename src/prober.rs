//! The liveness engine: bounded-parallelism fan-out of one probe per URL,
//! fan-in of outcomes into a deduplicated match list with monotone counters.

use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;
use std::fmt;
use tokio::time::Duration;

use crate::config::Config;
use crate::constants::{USER_AGENT, defaults, http_status, progress::REPORT_EVERY};
use crate::error::Result;
use crate::logging;
use crate::progress::{ProgressSink, ProgressSnapshot};
use crate::wayback::dedup_preserve_order;

/// Outcome of a single probe. Transport-level failures are values, not
/// errors; the scheduler treats every probe call as total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { status: u16 },
    Failure { reason: String },
}

impl ProbeOutcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status } => Some(*status),
            ProbeOutcome::Failure { .. } => None,
        }
    }

    pub fn is_alive(&self, target_status: u16) -> bool {
        matches!(self, ProbeOutcome::Success { status } if *status == target_status)
    }
}

/// A URL paired with its resolved outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Success { status } => write!(f, "{status} - {}", self.url),
            ProbeOutcome::Failure { reason } => write!(f, "ERR - {} - {reason}", self.url),
        }
    }
}

/// Final result of a probing run.
///
/// `alive` holds matching URLs in completion order (not submission order),
/// deduplicated by identity, so `alive.len() <= matched`. `completed` always
/// equals the number of submitted URLs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AliveReport {
    pub alive: Vec<String>,
    pub completed: usize,
    pub matched: usize,
}

#[async_trait]
pub trait CheckAlive {
    async fn check_alive(
        &self,
        urls: Vec<String>,
        config: &Config,
        sink: &dyn ProgressSink,
    ) -> Result<AliveReport>;
}

#[derive(Default, Debug)]
pub struct Prober {}

/// Probe one URL: HEAD following redirects, falling back to GET when the
/// target rejects the method. Never returns an error and never retries.
async fn probe(client: &reqwest::Client, url: &str) -> ProbeOutcome {
    match client.head(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if status == http_status::METHOD_NOT_ALLOWED || status == http_status::NOT_IMPLEMENTED {
                match client.get(url).send().await {
                    Ok(response) => ProbeOutcome::Success {
                        status: response.status().as_u16(),
                    },
                    Err(err) => ProbeOutcome::Failure {
                        reason: failure_reason(&err),
                    },
                }
            } else {
                ProbeOutcome::Success { status }
            }
        }
        Err(err) => ProbeOutcome::Failure {
            reason: failure_reason(&err),
        },
    }
}

fn failure_reason(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|source| source.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[async_trait]
impl CheckAlive for Prober {
    /// Run every URL to resolution across a bounded worker pool.
    ///
    /// The fan-in side is a single stream consumer, so counter updates and
    /// match appends are serialized without locks. Completion order is
    /// governed by network latency; nothing here depends on it beyond the
    /// first-seen dedup of the final list. There is no per-batch deadline:
    /// worst case the run takes `ceil(n / workers) * timeout`.
    async fn check_alive(
        &self,
        urls: Vec<String>,
        config: &Config,
        sink: &dyn ProgressSink,
    ) -> Result<AliveReport> {
        if urls.is_empty() {
            return Ok(AliveReport::default());
        }

        let total = urls.len();
        let target_status = config.target_status();
        let workers = config.worker_count();

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(workers.min(20))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        let mut outcomes = stream::iter(urls)
            .map(|url| {
                let client = &client;
                async move {
                    let outcome = probe(client, &url).await;
                    ProbeResult { url, outcome }
                }
            })
            .buffer_unordered(workers);

        let mut alive = Vec::new();
        let mut completed = 0usize;
        let mut matched = 0usize;

        while let Some(result) = outcomes.next().await {
            completed += 1;

            logging::log_probe_result(
                &result.url,
                result.outcome.status(),
                match &result.outcome {
                    ProbeOutcome::Failure { reason } => Some(reason.as_str()),
                    ProbeOutcome::Success { .. } => None,
                },
            );

            if result.outcome.is_alive(target_status) {
                alive.push(result.url);
                matched += 1;
            }

            if completed % REPORT_EVERY == 0 || completed == total {
                sink.on_progress(ProgressSnapshot {
                    completed,
                    matched,
                    total,
                });
            }
        }

        Ok(AliveReport {
            alive: dedup_preserve_order(alive),
            completed,
            matched,
        })
    }
}
