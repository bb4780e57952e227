use crate::job_data::JobId;

/// Every failure valq surfaces.
///
/// Transport errors from the backing store propagate unchanged; this layer
/// never retries on the caller's behalf.
#[derive(Debug, thiserror::Error)]
pub enum ValqError {
    /// No record is stored for the requested identifier. Either it was never
    /// set, or it was already cleared.
    #[error("no job record stored for id {0}")]
    JobNotFound(JobId),

    /// A stored record does not match the expected encoding. Treated as
    /// corruption and surfaced as-is, never replaced with defaults.
    #[error("job record could not be decoded: {0}")]
    JobDecodeFailed(#[source] serde_json::Error),

    #[error("job record could not be encoded: {0}")]
    JobEncodeFailed(#[source] serde_json::Error),

    /// An element claimed from a queue list is not a valid identifier.
    /// Indicates the list was written to by something other than valq.
    #[error("queue list element is not a valid identifier: {0}")]
    MalformedIdentifier(#[source] std::string::FromUtf8Error),

    #[error("Redis error: {0}")]
    Redis(#[from] deadpool_redis::redis::RedisError),

    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Redis pool creation error: {0}")]
    CreatePool(#[from] deadpool_redis::CreatePoolError),

    #[error("configuration error: {0}")]
    Config(String),
}
