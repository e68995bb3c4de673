//! `POST /api/verify`: validate the form upload and relay it to the backend.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;
use wire::{
    Attachment, FIELD_FILE_UPLOAD, FIELD_NEWS_TEXT, FIELD_TARGET_LANG, Language, VerificationRequest,
    media_type_for_path,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::upstream::RelayedReply;

pub async fn verify(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4();
    async move {
        let multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let request = read_request(multipart).await?;
        tracing::info!(
            lang = %request.target_lang,
            text_len = request.news_text.len(),
            file = request.attachment.as_ref().map(|a| a.file_name.as_str()),
            file_len = request.attachment.as_ref().map(|a| a.bytes.len()),
            "relaying verification request"
        );
        let reply = state.upstream.verify(request).await?;
        tracing::info!(status = reply.status, "verification service replied");
        Ok(relay(reply))
    }
    .instrument(tracing::info_span!("verify", %request_id))
    .await
}

/// Collect the multipart fields into a request.
///
/// A missing or empty `target_lang` means `auto`; an unknown one is
/// rejected. A file field without a name or content is what browsers send
/// for an untouched picker and counts as no file. Unknown fields are
/// ignored.
pub(crate) async fn read_request(mut multipart: Multipart) -> Result<VerificationRequest<Attachment>, ApiError> {
    let mut news_text = String::new();
    let mut target_lang = Language::default();
    let mut attachment = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            FIELD_NEWS_TEXT => news_text = field.text().await?,
            FIELD_TARGET_LANG => {
                let raw = field.text().await?;
                if !raw.trim().is_empty() {
                    target_lang = raw.parse().map_err(|e: wire::WireError| ApiError::BadRequest(e.to_string()))?;
                }
            }
            FIELD_FILE_UPLOAD => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let media_type = field
                    .content_type()
                    .map_or_else(|| media_type_for_path(&file_name).to_owned(), str::to_owned);
                let bytes = Vec::from(field.bytes().await?);
                let upload = Attachment { file_name, media_type, bytes };
                attachment = (!upload.is_blank()).then_some(upload);
            }
            other => tracing::debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    Ok(VerificationRequest::new(news_text, target_lang, attachment))
}

fn relay(reply: RelayedReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(reply.body)).into_response()
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
