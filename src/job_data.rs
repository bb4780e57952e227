use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque token identifying one stored job.
///
/// The same textual value is used as the queue list element and as the suffix
/// of the record's storage key; keeping the two consistent is what lets `pop`
/// and `clear` locate the matching record.
pub type JobId = String;

/// The serialized job record.
///
/// Field names on the wire are `camelCase`, and both timestamp fields encode
/// as integer seconds since the Unix epoch. External inspection tools parse
/// this shape, so changing it is a breaking change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    /// Opaque payload bytes. valq never interprets them; only the dispatch
    /// layer decodes them, keyed on `job_name`.
    pub payload: Vec<u8>,
    /// How many times the scheduling layer may retry this job.
    pub max_retry_count: u32,
    /// Name of the job type, used by the dispatch layer to pick a handler.
    pub job_name: String,
    /// Earliest time the job is eligible to run, if delayed.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub delay_until: Option<DateTime<Utc>>,
    /// When the job was enqueued.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub queued_at: DateTime<Utc>,
    /// Retry attempts consumed so far, once the scheduling layer starts
    /// counting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
}

impl JobData {
    /// A fresh record queued now, with no delay and no retries configured.
    pub fn new(job_name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            payload,
            max_retry_count: 0,
            job_name: job_name.into(),
            delay_until: None,
            queued_at: whole_seconds(Utc::now()),
            attempts: None,
        }
    }

    /// Marks the job as not eligible before `time`. Sub-second precision is
    /// truncated up front so the value round-trips the codec exactly.
    pub fn delayed_until(mut self, time: DateTime<Utc>) -> Self {
        self.delay_until = Some(whole_seconds(time));
        self
    }

    pub fn with_max_retry_count(mut self, max_retry_count: u32) -> Self {
        self.max_retry_count = max_retry_count;
        self
    }

    /// The rewritten record the scheduling layer stores back after a failed
    /// attempt.
    pub fn attempts_incremented(self) -> Self {
        Self {
            attempts: Some(self.attempts.unwrap_or(0) + 1),
            ..self
        }
    }
}

fn whole_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(time.timestamp(), 0).unwrap_or(time)
}
