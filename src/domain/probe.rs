use std::time::Duration;

use serde::Serialize;

/// Per-probe timeout applied when the configuration does not set one.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Pacing between probes applied when the configuration does not set one.
pub const DEFAULT_INTERVAL_SECS: u32 = 1;

/// IP version requested for the probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IpVersion {
    Unspecified,
    V4,
    V6,
}

/// Host platform flavor, injected wherever ping flag dialects differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform of the running host.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

/// Immutable probe configuration, fixed once arguments are parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub target: String,
    /// Hook argv; empty means no hook is configured.
    pub hook: Vec<String>,
    pub timeout_ms: Option<u64>,
    pub interval_secs: Option<u32>,
    pub ip_version: IpVersion,
}

impl Config {
    /// Effective per-probe timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    /// Effective pacing between probes.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS)))
    }

    pub fn hook_enabled(&self) -> bool {
        !self.hook.is_empty()
    }
}

/// Outcome of a single ping invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeResult {
    /// The ping exited 0. The round trip time is absent when the output
    /// carried no recognisable `.. ms` figure.
    Success { rtt_ms: Option<f64> },
    /// The probe did not come back in time, or the output says so.
    Timeout { message: String },
    /// Anything else: unknown host, missing binary, odd exit codes.
    Error { message: String },
}

/// Captured output of a finished hook process.
///
/// The exit code is data for the caller to judge, not a failure of the
/// invocation itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HookOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}
