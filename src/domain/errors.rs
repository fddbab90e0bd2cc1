use thiserror::Error;

/// Failure while reading the game schedule. The orchestrator maps this to
/// "no game today"; the variant keeps the distinction visible to callers.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule query failed: {0}")]
    Query(#[from] anyhow::Error),
}

/// Failure while delivering a message through the provider.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("provider rejected the message: status {status}, body: {body}")]
    Api { status: u16, body: String },
    #[error("provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}
