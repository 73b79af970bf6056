//! Transport encoding for task results.
//!
//! A [`TaskResult`] travels between CI jobs as JSON, UTF-8 encoded, then base64
//! encoded. Decoding is strict here; [`decode_or_zero`] is the lenient entry point
//! for callers that must always end up with a result.

use base64::{Engine, engine::general_purpose::STANDARD};
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::types::TaskResult;

/// Prefix of the stdout line the CI orchestrator captures.
pub const OUTPUT_MARKER: &str = "::set-output name=result::";

/// Values that mean "no result was produced upstream".
const MISSING_SENTINELS: [&str; 3] = ["", "null", "undefined"];

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no encoded result")]
    Missing,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("invalid result json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes `result` to JSON and base64-encodes the UTF-8 bytes.
pub fn encode_task_result(result: &TaskResult) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(result)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// The single stdout line carrying an encoded result.
pub fn output_line(encoded: &str) -> String {
    format!("{OUTPUT_MARKER}{encoded}")
}

pub fn decode_task_result(encoded: &str) -> Result<TaskResult, DecodeError> {
    let encoded = encoded.trim();
    if MISSING_SENTINELS.contains(&encoded) {
        return Err(DecodeError::Missing);
    }

    let bytes = STANDARD.decode(encoded)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Decodes `encoded`, falling back to [`TaskResult::zero`] on any failure.
///
/// Malformed data is logged; a missing value is not.
pub fn decode_or_zero(encoded: Option<&str>) -> TaskResult {
    match decode_task_result(encoded.unwrap_or_default()) {
        Ok(result) => result,
        Err(DecodeError::Missing) => TaskResult::zero(),
        Err(err) => {
            tracing::warn!(error = %err, "Decode error, counting result as zero");
            TaskResult::zero()
        }
    }
}
