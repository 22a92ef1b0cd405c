//! Library level tests driving the probe executor and the hook invoker
//! against small shell stand-ins instead of a real ping binary.

#![cfg(unix)]

use std::time::Duration;

use serde_json::{Map, Value};

use pingwatch::{PingwatchError, ProbeResult, probe_once, run_hook, run_hook_with_timeout};

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

fn context(details: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "target".to_string(),
        Value::String("example.com".to_string()),
    );
    fields.insert("reason".to_string(), Value::String("timeout".to_string()));
    fields.insert("details".to_string(), Value::String(details.to_string()));
    fields
}

#[tokio::test]
async fn test_probe_zero_exit_with_rtt() {
    let result = probe_once(
        &argv(&["sh", "-c", "echo '64 bytes from 192.0.2.1: time=12.3 ms'"]),
        Duration::from_secs(5),
    )
    .await;
    assert_eq!(result, ProbeResult::Success { rtt_ms: Some(12.3) });
}

#[tokio::test]
async fn test_probe_zero_exit_without_rtt_is_still_success() {
    let result = probe_once(
        &argv(&["sh", "-c", "echo 'nothing to see here'"]),
        Duration::from_secs(5),
    )
    .await;
    assert_eq!(result, ProbeResult::Success { rtt_ms: None });
}

#[tokio::test]
async fn test_probe_packet_loss_is_a_timeout() {
    let result = probe_once(
        &argv(&["sh", "-c", "echo '1 packets transmitted, 0 received, 100% packet loss'; exit 1"]),
        Duration::from_secs(5),
    )
    .await;
    match result {
        ProbeResult::Timeout { message } => assert!(message.contains("100% packet loss")),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_unrelated_failure_is_an_error() {
    let result = probe_once(
        &argv(&["sh", "-c", "echo 'ping: unknown host example.invalid' >&2; exit 2"]),
        Duration::from_secs(5),
    )
    .await;
    match result {
        ProbeResult::Error { message } => assert!(message.contains("unknown host")),
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_missing_binary_is_an_error() {
    let result = probe_once(
        &argv(&["pingwatch-no-such-binary"]),
        Duration::from_secs(5),
    )
    .await;
    assert!(matches!(result, ProbeResult::Error { .. }));
}

#[tokio::test]
async fn test_probe_hanging_process_times_out() {
    let result = probe_once(&argv(&["sleep", "5"]), Duration::from_millis(200)).await;
    assert_eq!(
        result,
        ProbeResult::Timeout {
            message: "ping process timed out".to_string(),
        }
    );
}

#[tokio::test]
async fn test_hook_captures_both_streams_and_the_exit_code() {
    let outcome = run_hook(
        &argv(&["sh", "-c", "echo out; echo err >&2; exit 3"]),
        &context("no reply"),
    )
    .await
    .unwrap();

    assert_eq!(outcome.stdout, "out\n");
    assert_eq!(outcome.stderr, "err\n");
    assert_eq!(outcome.exit_code, 3);
}

#[tokio::test]
async fn test_hook_receives_the_context_on_stdin() {
    let outcome = run_hook(&argv(&["cat"]), &context("said \"gone\"")).await.unwrap();

    let parsed: Value = serde_json::from_str(&outcome.stdout).unwrap();
    let object = parsed.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert!(object["timestamp"].is_string());
    assert_eq!(object["target"], "example.com");
    assert_eq!(object["reason"], "timeout");
    assert_eq!(object["details"], "said \"gone\"");
}

#[tokio::test]
async fn test_hook_over_budget_fails_as_timed_out() {
    let err = run_hook_with_timeout(
        &argv(&["sleep", "5"]),
        &context("no reply"),
        Duration::from_millis(200),
    )
    .await
    .expect_err("hook should exceed its budget");
    assert!(matches!(err, PingwatchError::HookTimeout));
    assert_eq!(err.to_string(), "hook timed out");
}

#[tokio::test]
async fn test_hook_missing_binary_fails_with_io_error() {
    let err = run_hook(&argv(&["pingwatch-no-such-hook"]), &context("no reply"))
        .await
        .expect_err("spawn should fail");
    assert!(matches!(err, PingwatchError::Io(_)));
}
