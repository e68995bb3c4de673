//! Verification response decoding.
//!
//! DESIGN
//! ======
//! Replies are decoded through typed structs rather than trusted as-is: a
//! body that does not match the success shape becomes a `Failure`, never a
//! half-filled verdict.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR: &str = "Something went wrong";
/// Shown when a non-ok reply is JSON but names no error.
pub const SERVER_ERROR: &str = "Server error";
/// Shown when an ok reply does not match the verdict shape.
pub const MALFORMED_RESPONSE: &str = "Unexpected response from the verification service";

/// Verdict returned by the verification service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: String,
    pub analysis: String,
    pub evidence: String,
    /// Text the service recovered from non-text media (OCR, transcription).
    pub extracted_text: Option<String>,
}

/// Outcome of one request/response cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationResult {
    Success(Verdict),
    Failure { message: String },
}

impl VerificationResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { message: message.into() }
    }

    /// Failure for a request that never produced a readable reply.
    #[must_use]
    pub fn transport_failure(detail: &str) -> Self {
        let detail = detail.trim();
        if detail.is_empty() { Self::failure(FALLBACK_ERROR) } else { Self::failure(detail) }
    }
}

#[derive(Deserialize)]
struct SuccessBody {
    verdict: String,
    analysis: String,
    evidence: String,
    #[serde(default)]
    original_text: Option<String>,
}

impl From<SuccessBody> for Verdict {
    fn from(body: SuccessBody) -> Self {
        Self {
            verdict: body.verdict,
            analysis: body.analysis,
            evidence: body.evidence,
            extracted_text: body.original_text.filter(|text| !text.trim().is_empty()),
        }
    }
}

/// Whether an HTTP status counts as ok (2xx).
#[must_use]
pub fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a verification reply from its HTTP status and raw body.
///
/// - ok + `error` string: failure with that message
/// - ok + verdict shape: success
/// - ok + anything else: [`MALFORMED_RESPONSE`]
/// - non-ok + JSON: its `error`, or [`SERVER_ERROR`]
/// - non-ok + unreadable body: treated as a transport failure naming the status
#[must_use]
pub fn decode_response(status: u16, body: &str) -> VerificationResult {
    let parsed = serde_json::from_str::<Value>(body);

    if !is_ok_status(status) {
        return match parsed {
            Ok(value) => VerificationResult::failure(error_message(&value).unwrap_or_else(|| SERVER_ERROR.to_owned())),
            Err(_) => VerificationResult::transport_failure(&format!("Verification service returned HTTP {status}")),
        };
    }

    let Ok(value) = parsed else {
        return VerificationResult::failure(MALFORMED_RESPONSE);
    };
    if let Some(message) = error_message(&value) {
        return VerificationResult::failure(message);
    }
    match serde_json::from_value::<SuccessBody>(value) {
        Ok(body) => VerificationResult::Success(body.into()),
        Err(_) => VerificationResult::failure(MALFORMED_RESPONSE),
    }
}

/// JSON error body in the shape the form understands.
#[must_use]
pub fn error_body(message: &str) -> Value {
    serde_json::json!({ "error": message })
}

fn error_message(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

/// Display classification of a verdict label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictTone {
    Positive,
    Negative,
    Uncertain,
}

impl VerdictTone {
    /// Classify a verdict or status label such as `Real`, `Misconception`
    /// or `Needs Proof`.
    #[must_use]
    pub fn of(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "real" | "fact" | "true" => Self::Positive,
            "fake" | "misconception" | "false" => Self::Negative,
            _ => Self::Uncertain,
        }
    }

    /// CSS modifier suffix for this tone.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Uncertain => "uncertain",
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
