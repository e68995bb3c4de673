//! Draft and request lifecycle for the verification form.
//!
//! DESIGN
//! ======
//! The request lifecycle is one enum (`Idle`, `Submitting`, `Completed`)
//! instead of a loading flag next to a result slot, so a stale verdict can
//! never be shown while a new request is in flight. Each submission gets a
//! ticket; a completion carrying any other ticket is dropped.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use wire::{Language, VerificationRequest, VerificationResult};

pub const SUBMIT_LABEL: &str = "Check News";
pub const BUSY_LABEL: &str = "Checking...";

/// Metadata of the file picked in the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl SelectedFile {
    /// Short description shown under the picker, e.g.
    /// `clip.mp4 (video/mp4, 2.4 MB)`. Browsers leave the type empty for
    /// extensions they do not know; then only the size is shown.
    pub fn summary(&self) -> String {
        if self.media_type.is_empty() {
            format!("{} ({})", self.name, format_size(self.size))
        } else {
            format!("{} ({}, {})", self.name, self.media_type, format_size(self.size))
        }
    }
}

/// Field values the user is editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyDraft {
    pub news_text: String,
    pub target_lang: Language,
    pub file: Option<SelectedFile>,
}

impl VerifyDraft {
    /// Pair the draft with the caller's file handle.
    ///
    /// The handle is only attached while the draft still records a selected
    /// file, so clearing the picker also drops the upload.
    pub fn to_request<F>(&self, handle: Option<F>) -> VerificationRequest<F> {
        let attachment = self.file.as_ref().and(handle);
        VerificationRequest::new(self.news_text.clone(), self.target_lang, attachment)
    }
}

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Where the current request is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting(SubmitTicket),
    Completed(VerificationResult),
}

/// Form-local state: draft fields plus request lifecycle.
#[derive(Clone, Debug, Default)]
pub struct VerifyState {
    pub draft: VerifyDraft,
    request: RequestState,
    issued: u64,
}

impl VerifyState {
    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.request, RequestState::Submitting(_))
    }

    /// Enter `Submitting`, discarding any previous result.
    ///
    /// Returns `None` while a submission is already outstanding.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_busy() {
            return None;
        }
        self.issued += 1;
        let ticket = SubmitTicket(self.issued);
        self.request = RequestState::Submitting(ticket);
        Some(ticket)
    }

    /// Record the outcome of `ticket`. Returns `false` and changes nothing
    /// when `ticket` is not the outstanding submission.
    pub fn complete(&mut self, ticket: SubmitTicket, result: VerificationResult) -> bool {
        if self.request != RequestState::Submitting(ticket) {
            return false;
        }
        self.request = RequestState::Completed(result);
        true
    }

    /// The result to render, present only once a request has completed.
    pub fn shown_result(&self) -> Option<&VerificationResult> {
        match &self.request {
            RequestState::Completed(result) => Some(result),
            RequestState::Idle | RequestState::Submitting(_) => None,
        }
    }
}

/// Label of the submit control.
pub fn submit_label(busy: bool) -> &'static str {
    if busy { BUSY_LABEL } else { SUBMIT_LABEL }
}

/// Human-readable byte size with one decimal above 1 KB.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}
