use chrono::Utc;
use serde::Serialize;

use crate::domain::probe::{HookOutcome, ProbeResult};
use crate::error::PingwatchError;
use crate::stats::Stats;

const SCHEMA_VERSION: u8 = 1;

#[derive(Serialize)]
struct JsonProbe<'a> {
    schema_version: u8,
    event: &'static str,
    ts: String,
    target: &'a str,
    #[serde(flatten)]
    result: &'a ProbeResult,
}

#[derive(Serialize)]
struct JsonHook<'a> {
    schema_version: u8,
    event: &'static str,
    ts: String,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a HookOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonStats<'a> {
    schema_version: u8,
    event: &'static str,
    ts: String,
    target: &'a str,
    #[serde(flatten)]
    stats: &'a Stats,
}

/// Serialize one probe outcome as a JSON line.
pub fn probe_to_json(target: &str, result: &ProbeResult) -> Result<String, PingwatchError> {
    let record = JsonProbe {
        schema_version: SCHEMA_VERSION,
        event: "probe",
        ts: Utc::now().to_rfc3339(),
        target,
        result,
    };
    serde_json::to_string(&record).map_err(|e| PingwatchError::Other(e.to_string()))
}

/// Serialize one hook outcome as a JSON line.
pub fn hook_to_json(
    target: &str,
    outcome: &Result<HookOutcome, PingwatchError>,
) -> Result<String, PingwatchError> {
    let record = JsonHook {
        schema_version: SCHEMA_VERSION,
        event: "hook",
        ts: Utc::now().to_rfc3339(),
        target,
        outcome: outcome.as_ref().ok(),
        error: outcome.as_ref().err().map(|e| e.to_string()),
    };
    serde_json::to_string(&record).map_err(|e| PingwatchError::Other(e.to_string()))
}

/// Serialize the closing session summary as a JSON line.
pub fn stats_to_json(target: &str, stats: &Stats) -> Result<String, PingwatchError> {
    let record = JsonStats {
        schema_version: SCHEMA_VERSION,
        event: "stats",
        ts: Utc::now().to_rfc3339(),
        target,
        stats,
    };
    serde_json::to_string(&record).map_err(|e| PingwatchError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_probe_record_shape() {
        let line = probe_to_json(
            "example.com",
            &ProbeResult::Success { rtt_ms: Some(12.3) },
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["event"], "probe");
        assert_eq!(parsed["target"], "example.com");
        assert_eq!(parsed["outcome"], "success");
        assert_eq!(parsed["rtt_ms"], 12.3);
        assert!(parsed["ts"].is_string());
    }

    #[test]
    fn test_failure_record_carries_message() {
        let line = probe_to_json(
            "example.com",
            &ProbeResult::Timeout {
                message: "no reply".to_string(),
            },
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["outcome"], "timeout");
        assert_eq!(parsed["message"], "no reply");
    }

    #[test]
    fn test_hook_record_split_by_outcome() {
        let ok = hook_to_json(
            "example.com",
            &Ok(HookOutcome {
                stdout: "done\n".to_string(),
                stderr: String::new(),
                exit_code: 0,
            }),
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&ok).unwrap();
        assert_eq!(parsed["outcome"]["exit_code"], 0);
        assert!(parsed.get("error").is_none());

        let err = hook_to_json("example.com", &Err(PingwatchError::HookTimeout)).unwrap();
        let parsed: Value = serde_json::from_str(&err).unwrap();
        assert_eq!(parsed["error"], "hook timed out");
        assert!(parsed.get("outcome").is_none());
    }
}
