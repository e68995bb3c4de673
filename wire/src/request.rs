//! Outbound verification request and its multipart field plan.

use crate::{FIELD_FILE_UPLOAD, FIELD_NEWS_TEXT, FIELD_TARGET_LANG, Language};

/// `accept` filter offered by file pickers. A hint for the user, not a
/// security boundary: the backend decides what it can read.
pub const ACCEPTED_UPLOADS: &str = "image/*,audio/*,video/*,.pdf,.docx,.txt";

const OCTET_STREAM: &str = "application/octet-stream";

/// One verification request.
///
/// `F` is the attachment representation of the caller: a browser `File`
/// handle in the hydrated client, an in-memory [`Attachment`] in the gateway
/// and CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest<F> {
    pub news_text: String,
    pub target_lang: Language,
    pub attachment: Option<F>,
}

/// A single multipart field, borrowed from a [`VerificationRequest`].
#[derive(Debug, PartialEq, Eq)]
pub enum FormPart<'a, F> {
    Text { name: &'static str, value: &'a str },
    File { name: &'static str, file: &'a F },
}

impl<F> VerificationRequest<F> {
    pub fn new(news_text: impl Into<String>, target_lang: Language, attachment: Option<F>) -> Self {
        Self { news_text: news_text.into(), target_lang, attachment }
    }

    /// Multipart fields in send order.
    ///
    /// Text and language are always present (text may be empty). The file
    /// field is omitted entirely when there is no attachment.
    pub fn parts(&self) -> Vec<FormPart<'_, F>> {
        let mut parts = vec![
            FormPart::Text { name: FIELD_NEWS_TEXT, value: &self.news_text },
            FormPart::Text { name: FIELD_TARGET_LANG, value: self.target_lang.code() },
        ];
        if let Some(file) = &self.attachment {
            parts.push(FormPart::File { name: FIELD_FILE_UPLOAD, file });
        }
        parts
    }
}

/// An uploaded file held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// An attachment with neither a name nor content, which is what a browser
    /// sends for an untouched file input.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// Media type for a file path, from its extension.
///
/// Covers the formats the verification backend extracts text from; anything
/// else is `application/octet-stream`.
#[must_use]
pub fn media_type_for_path(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return OCTET_STREAM;
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "flv" => "video/x-flv",
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
