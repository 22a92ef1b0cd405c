use console::Term;
use serde_json::{Map, Value};
use tokio::signal;

use crate::adapters::hook;
use crate::domain::probe::{Config, HookOutcome, Platform, ProbeResult};
use crate::error::PingwatchError;
use crate::fmt::{self, OutputFormat};
use crate::services::probe;
use crate::stats::{Stats, StatsRecorder};

/// Drive the probe loop until Ctrl-C.
///
/// Every iteration builds the ping command, runs one bounded probe,
/// reports the outcome, and fires the hook on failure. The interval
/// sleep races Ctrl-C so cancellation lands between iterations and ends
/// the loop gracefully. Returns the accumulated session stats.
pub async fn run(config: &Config, format: OutputFormat, term: &Term) -> Stats {
    let platform = Platform::current();
    let mut recorder = StatsRecorder::new();

    loop {
        let argv = probe::build_ping_command(config, platform);
        let result = probe::probe_once(&argv, config.timeout()).await;
        recorder.record(&result);
        report_probe(term, format, &config.target, &result);

        let failure = match &result {
            ProbeResult::Success { .. } => None,
            ProbeResult::Timeout { message } => Some(("timeout", message)),
            ProbeResult::Error { message } => Some(("error", message)),
        };
        if let Some((reason, details)) = failure {
            if config.hook_enabled() {
                let outcome = fire_hook(config, reason, details).await;
                report_hook(term, format, &config.target, &outcome);
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(config.interval()) => {}
            _ = signal::ctrl_c() => break,
        }
    }

    recorder.finish()
}

async fn fire_hook(
    config: &Config,
    reason: &str,
    details: &str,
) -> Result<HookOutcome, PingwatchError> {
    let mut fields = Map::new();
    fields.insert("target".to_string(), Value::String(config.target.clone()));
    fields.insert("reason".to_string(), Value::String(reason.to_string()));
    fields.insert("details".to_string(), Value::String(details.to_string()));
    hook::run_hook(&config.hook, &fields).await
}

fn report_probe(term: &Term, format: OutputFormat, target: &str, result: &ProbeResult) {
    match format {
        OutputFormat::Text => {
            term.write_line(&fmt::text::render_probe(target, result)).ok();
        }
        OutputFormat::Json => match fmt::json::probe_to_json(target, result) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serializing: {}", e),
        },
    }
}

fn report_hook(
    term: &Term,
    format: OutputFormat,
    target: &str,
    outcome: &Result<HookOutcome, PingwatchError>,
) {
    match format {
        OutputFormat::Text => {
            term.write_line(&fmt::text::render_hook(outcome)).ok();
        }
        OutputFormat::Json => match fmt::json::hook_to_json(target, outcome) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serializing: {}", e),
        },
    }
}
