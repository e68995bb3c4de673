//! `reqwest` multipart forms built from the field plan.

use reqwest::multipart::{Form, Part};

use crate::{Attachment, FormPart, VerificationRequest};

/// Turn a request into a multipart form, consuming it so the upload bytes
/// move into the form instead of being copied.
///
/// # Errors
///
/// Fails when the attachment's media type is not a valid MIME type.
pub fn into_form(request: VerificationRequest<Attachment>) -> Result<Form, reqwest::Error> {
    let mut form = Form::new();
    let mut file_field = None;
    for part in request.parts() {
        match part {
            FormPart::Text { name, value } => form = form.text(name, value.to_owned()),
            FormPart::File { name, .. } => file_field = Some(name),
        }
    }
    // The file is always the last planned field, so appending it after the
    // loop keeps the send order.
    if let (Some(name), Some(file)) = (file_field, request.attachment) {
        form = form.part(name, file_part(file)?);
    }
    Ok(form)
}

fn file_part(file: Attachment) -> Result<Part, reqwest::Error> {
    Part::bytes(file.bytes).file_name(file.file_name).mime_str(&file.media_type)
}

#[cfg(test)]
#[path = "multipart_test.rs"]
mod tests;
