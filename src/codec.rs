//! Byte encoding of job records.
//!
//! Records travel as JSON with integer-seconds timestamps. Decoding is
//! strict: bytes that do not match the record shape fail with
//! [`ValqError::JobDecodeFailed`] rather than being patched with defaults,
//! since a half-readable record in the store means corruption.

use crate::{ValqError, job_data::JobData};

pub fn encode(data: &JobData) -> Result<Vec<u8>, ValqError> {
    serde_json::to_vec(data).map_err(ValqError::JobEncodeFailed)
}

pub fn decode(bytes: &[u8]) -> Result<JobData, ValqError> {
    serde_json::from_slice(bytes).map_err(ValqError::JobDecodeFailed)
}
