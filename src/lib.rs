//! pingwatch library exposing reusable reachability probing utilities.

pub mod adapters;
pub mod cli;
pub mod domain;
mod error;
pub mod fmt;
pub mod services;
pub mod stats;

pub use adapters::hook::{run_hook, run_hook_with_timeout};
pub use domain::probe::{Config, HookOutcome, IpVersion, Platform, ProbeResult};
pub use error::PingwatchError;
pub use services::probe::{build_ping_command, probe_once};
