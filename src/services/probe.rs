use std::time::Duration;

use tracing::{debug, instrument};

use crate::adapters::ping_proc;
use crate::domain::probe::{Config, IpVersion, Platform, ProbeResult};

/// Output phrases that mark a failed probe as a timeout rather than an
/// error. Ping exit codes are not consistent across platforms, so the
/// text is the tiebreaker.
const TIMEOUT_MARKERS: [&str; 3] = [
    "timed out",
    "100% packet loss",
    "destination host unreachable",
];

const TIMEOUT_CONTEXT_LINES: usize = 5;
const ERROR_CONTEXT_LINES: usize = 8;

/// Pure function: build the ping argument vector for a configuration.
///
/// Deterministic for a given `(config, platform)` pair. The platform is
/// injected so both flag dialects can be exercised on any host.
pub fn build_ping_command(config: &Config, platform: Platform) -> Vec<String> {
    let mut args = vec!["ping".to_string()];

    match config.ip_version {
        IpVersion::V4 => args.push("-4".to_string()),
        IpVersion::V6 => args.push("-6".to_string()),
        IpVersion::Unspecified => {}
    }

    if let Some(ms) = config.timeout_ms {
        if platform.is_windows() {
            // Windows ping waits per reply in milliseconds
            args.push("-w".to_string());
            args.push(ms.to_string());
        } else {
            // Unix ping takes seconds; round up
            args.push("-W".to_string());
            args.push(((ms + 999) / 1000).to_string());
        }
    }

    if let Some(secs) = config.interval_secs {
        // Windows ping has no interval flag; the monitor loop paces instead
        if !platform.is_windows() {
            args.push("-i".to_string());
            args.push(secs.to_string());
        }
    }

    // one packet per invocation, so every run is a single bounded probe
    if platform.is_windows() {
        args.push("-n".to_string());
        args.push("1".to_string());
    } else {
        args.push("-c".to_string());
        args.push("1".to_string());
    }

    args.push(config.target.clone());
    args
}

/// Scan ping output for the first round trip time.
///
/// Accepts "time=12.3 ms", "12.3 ms", "time=12ms", "12ms", any case.
/// Hand-rolled scan instead of a regex, matching a number followed by
/// optional whitespace and "ms".
pub fn extract_rtt(output: &str) -> Option<f64> {
    let lower = output.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        let end = i;
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if lower[j..].starts_with("ms") {
            if let Ok(rtt) = lower[start..end].parse::<f64>() {
                return Some(rtt);
            }
        }
    }
    None
}

/// Classify a finished ping process into a probe result.
///
/// Exit 0 is a success even when no round trip time can be read out of
/// the output. Non-zero exits are split into timeout and error by the
/// output text, truncated to a few lines of context.
pub fn classify_exit(exit_code: i32, output: &str) -> ProbeResult {
    if exit_code == 0 {
        return ProbeResult::Success {
            rtt_ms: extract_rtt(output),
        };
    }
    let lower = output.to_ascii_lowercase();
    if TIMEOUT_MARKERS.iter().any(|marker| lower.contains(marker)) {
        ProbeResult::Timeout {
            message: first_lines(output, TIMEOUT_CONTEXT_LINES),
        }
    } else {
        ProbeResult::Error {
            message: first_lines(output, ERROR_CONTEXT_LINES),
        }
    }
}

fn first_lines(text: &str, limit: usize) -> String {
    text.lines().take(limit).collect::<Vec<_>>().join("\n")
}

/// Run a single probe: spawn the argv and classify how it went.
///
/// The process is forcibly terminated if it outlives `timeout`; spawn
/// failures come back as [`ProbeResult::Error`], never as a panic.
#[instrument(skip(timeout))]
pub async fn probe_once(argv: &[String], timeout: Duration) -> ProbeResult {
    match tokio::time::timeout(timeout, ping_proc::run(argv)).await {
        Ok(Ok(raw)) => {
            debug!(exit_code = raw.exit_code, "ping exited");
            classify_exit(raw.exit_code, &raw.output)
        }
        Ok(Err(e)) => ProbeResult::Error {
            message: e.to_string(),
        },
        Err(_) => ProbeResult::Timeout {
            message: "ping process timed out".to_string(),
        },
    }
}
