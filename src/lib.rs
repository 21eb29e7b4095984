//! wayscan - wayback-based passive recon and concurrent URL liveness prober.
//!
//! The pipeline: fetch every archived URL for a target from the Wayback
//! Machine CDX index ([`wayback`]), bucket them by extension and by
//! vulnerability-associated query parameters ([`classify`]), write one
//! report file per bucket ([`output`]), and optionally probe the whole set
//! for liveness over a bounded worker pool ([`prober`]).

pub mod banner;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod output;
pub mod prober;
pub mod progress;
pub mod wayback;

pub use classify::{Categorized, Category, RuleTables, categorize, classify};
pub use config::{CliConfig, Config};
pub use error::{Result, WayscanError};
pub use prober::{AliveReport, CheckAlive, ProbeOutcome, ProbeResult, Prober};
pub use progress::{ConsoleProgress, ProgressSink, ProgressSnapshot, SilentProgress};
