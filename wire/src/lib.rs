//! Shared verification wire model for the browser form, the gateway and the CLI.
//!
//! This crate owns the request contract (multipart field names and order),
//! the response decoding rules, and the reporting-view schema. Every caller
//! builds its outbound request from [`VerificationRequest::parts`] and
//! interprets replies with [`decode_response`], so the three surfaces cannot
//! drift apart.

pub mod dashboard;
pub mod language;
#[cfg(feature = "multipart")]
pub mod multipart;
pub mod request;
pub mod response;

pub use dashboard::{DashboardData, DayCount, PieSlice, RecentResult};
pub use language::Language;
pub use request::{ACCEPTED_UPLOADS, Attachment, FormPart, VerificationRequest, media_type_for_path};
pub use response::{
    FALLBACK_ERROR, MALFORMED_RESPONSE, SERVER_ERROR, Verdict, VerdictTone, VerificationResult, decode_response,
    error_body, is_ok_status,
};

/// Multipart field carrying the free text.
pub const FIELD_NEWS_TEXT: &str = "news_text";
/// Multipart field carrying the output language code.
pub const FIELD_TARGET_LANG: &str = "target_lang";
/// Multipart field carrying the optional uploaded file.
pub const FIELD_FILE_UPLOAD: &str = "file_upload";

/// Verification endpoint path, relative to an API base URL.
pub const VERIFY_PATH: &str = "/api/verify";
/// Reporting-view endpoint path, relative to an API base URL.
pub const DASHBOARD_PATH: &str = "/api/dashboard";
/// Liveness endpoint path.
pub const HEALTH_PATH: &str = "/healthz";

/// Error returned when parsing wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The language code is not one of the supported output languages.
    #[error("unsupported output language: {0}")]
    UnknownLanguage(String),
}

/// Join an API base URL and an endpoint path.
///
/// An empty base yields the bare path, which the browser resolves against
/// the current origin.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim().trim_end_matches('/'))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
