//! Failure hook invocation: spawn an external command, hand it a JSON
//! context object on stdin, and capture everything it says back.

use std::process::Stdio;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::warn;

use crate::domain::probe::HookOutcome;
use crate::error::PingwatchError;

/// Hard ceiling on hook run time.
const HOOK_TIMEOUT: Duration = Duration::from_secs(60);

/// How long to wait for the drain tasks after a forced kill.
const DRAIN_GRACE: Duration = Duration::from_millis(100);

#[derive(Serialize)]
struct HookContext<'a> {
    timestamp: String,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
}

fn context_payload(fields: &Map<String, Value>) -> Result<String, PingwatchError> {
    let context = HookContext {
        timestamp: Utc::now().to_rfc3339(),
        fields,
    };
    serde_json::to_string(&context).map_err(|e| PingwatchError::Other(e.to_string()))
}

/// Run the hook argv with the default time budget.
///
/// An empty argv is a vacuous success with empty output; callers may
/// skip the call entirely, but they do not have to.
pub async fn run_hook(
    hook: &[String],
    fields: &Map<String, Value>,
) -> Result<HookOutcome, PingwatchError> {
    run_hook_with_timeout(hook, fields, HOOK_TIMEOUT).await
}

/// Same as [`run_hook`] with an explicit time budget.
pub async fn run_hook_with_timeout(
    hook: &[String],
    fields: &Map<String, Value>,
    budget: Duration,
) -> Result<HookOutcome, PingwatchError> {
    let Some((program, rest)) = hook.split_first() else {
        return Ok(HookOutcome {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        });
    };

    let payload = context_payload(fields)?;

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| std::io::Error::other("hook stdin pipe not available"))?;
    stdin.write_all(payload.as_bytes()).await?;
    stdin.flush().await?;
    // dropping the handle closes the pipe, signalling end of input
    drop(stdin);

    let stdout_task = drain(
        child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("hook stdout pipe not available"))?,
    );
    let stderr_task = drain(
        child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("hook stderr pipe not available"))?,
    );

    match timeout(budget, child.wait()).await {
        Ok(Ok(status)) => {
            let stdout = join_drain(stdout_task).await;
            let stderr = join_drain(stderr_task).await;
            Ok(HookOutcome {
                stdout,
                stderr,
                exit_code: status.code().unwrap_or(-1),
            })
        }
        Ok(Err(e)) => Err(e.into()),
        Err(_) => {
            if let Err(e) = child.start_kill() {
                warn!("failed to kill timed out hook: {e}");
            }
            let _ = timeout(DRAIN_GRACE, stdout_task).await;
            let _ = timeout(DRAIN_GRACE, stderr_task).await;
            Err(PingwatchError::HookTimeout)
        }
    }
}

fn drain<R>(mut pipe: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            warn!("failed to drain hook pipe: {e}");
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

async fn join_drain(task: JoinHandle<String>) -> String {
    task.await.unwrap_or_default()
}
