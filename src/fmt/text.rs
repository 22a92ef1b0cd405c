use console::style;

use crate::domain::probe::{HookOutcome, ProbeResult};
use crate::error::PingwatchError;
use crate::stats::Stats;

/// Render a probe outcome into a single human readable line.
pub fn render_probe(target: &str, result: &ProbeResult) -> String {
    match result {
        ProbeResult::Success { rtt_ms: Some(rtt) } => format!(
            "{} {}: {}",
            style("OK").green().bold(),
            style(target).green(),
            style(format!("{:.3} ms", rtt)).yellow()
        ),
        ProbeResult::Success { rtt_ms: None } => format!(
            "{} {}: {}",
            style("OK").green().bold(),
            style(target).green(),
            style("rtt unavailable").yellow()
        ),
        ProbeResult::Timeout { message } => {
            format!("{} - {}", style("TIMEOUT").red().bold(), message)
        }
        ProbeResult::Error { message } => {
            format!("{} - {}", style("ERROR").red().bold(), message)
        }
    }
}

/// Render a hook outcome: one status line plus any captured output.
pub fn render_hook(outcome: &Result<HookOutcome, PingwatchError>) -> String {
    match outcome {
        Ok(hook) => {
            let mut out = format!(
                "{} exit code {}",
                style("Hook executed:").cyan().bold(),
                hook.exit_code
            );
            if !hook.stdout.is_empty() {
                out.push_str(&format!(
                    "\n{} {}",
                    style("hook stdout:").cyan(),
                    hook.stdout.trim_end()
                ));
            }
            if !hook.stderr.is_empty() {
                out.push_str(&format!(
                    "\n{} {}",
                    style("hook stderr:").cyan(),
                    hook.stderr.trim_end()
                ));
            }
            out
        }
        Err(e) => format!("{} {}", style("Hook failed:").red().bold(), e),
    }
}

/// Banner printed before the first probe.
pub fn render_banner(target: &str) -> String {
    format!(
        "{} {} (Ctrl-C to stop)",
        style("Probing").bold(),
        style(target).green()
    )
}

/// Closing summary after the loop ends.
pub fn render_stats(target: &str, stats: &Stats) -> String {
    let mut out = format!(
        "{} {} probes, {} ok, {} failed",
        style(target).green().bold(),
        stats.sent,
        stats.ok,
        stats.failed
    );
    if let Some(rtt) = &stats.rtt {
        out.push_str(&format!(
            " | rtt min/avg/max: {:.3}/{:.3}/{:.3} ms",
            rtt.min, rtt.avg, rtt.max
        ));
    }
    out
}
