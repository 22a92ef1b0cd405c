use std::io;
use std::process::Stdio;

use tokio::process::Command;

/// Raw view of a finished ping process: exit code plus combined output.
#[derive(Debug, Clone)]
pub struct RawProbe {
    pub exit_code: i32,
    /// stdout followed by stderr, lossily decoded as UTF-8.
    pub output: String,
}

/// Spawn the probe argv and wait for it to exit, capturing its output.
///
/// The child is killed when the returned future is dropped, which is how
/// callers enforce their timeout.
pub async fn run(argv: &[String]) -> io::Result<RawProbe> {
    let (program, rest) = argv
        .split_first()
        .ok_or_else(|| io::Error::other("empty probe command"))?;

    let output = Command::new(program)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(RawProbe {
        exit_code: output.status.code().unwrap_or(-1),
        output: text,
    })
}
