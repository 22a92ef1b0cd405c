use thiserror::Error;

/// Top-level error type for the pingwatch library.
#[derive(Error, Debug)]
pub enum PingwatchError {
    /// Hook process exceeded its time budget.
    #[error("hook timed out")]
    HookTimeout,
    /// Underlying IO error (spawn or pipe).
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Other error cases.
    #[error("other: {0}")]
    Other(String),
}
