//! Manual process routes
//!
//! - `POST /upload/manual-data` - Multipart upload of a `file` part
//! - `POST /notifications` - Form-encoded `email` and `message`

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use ecologic_common::types::UploadedFileMeta;

use super::commands::{SendNotificationCommand, SendNotificationResponse, UploadManualDataCommand};
use crate::error::{AppError, AppResult};
use crate::features::shared::FormPayload;

/// Name of the multipart part holding the uploaded file
pub const FILE_FIELD: &str = "file";

/// Room for boundaries and part headers on top of the file content
pub const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

/// Cap on the content of the uploaded file, in bytes
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

impl UploadLimit {
    /// Cap on the whole multipart request body
    pub fn request_body_max(self) -> usize {
        self.0.saturating_add(MULTIPART_OVERHEAD_BYTES)
    }
}

pub fn manual_routes(limit: UploadLimit) -> Router<UploadLimit> {
    Router::new()
        .route(
            "/upload/manual-data",
            post(upload_manual_data).layer(DefaultBodyLimit::max(limit.request_body_max())),
        )
        .route("/notifications", post(send_notification))
}

fn multipart_error(status: StatusCode, limit: usize, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::invalid_body(message)
    }
}

/// Upload a manual data file
///
/// # Response
///
/// - `200 OK` - `{filename, content_size}`
/// - `413 Payload Too Large` - File exceeds the configured cap
/// - `422 Unprocessable Entity` - Not multipart, or no `file` part
#[tracing::instrument(skip(limit, multipart))]
async fn upload_manual_data(
    State(limit): State<UploadLimit>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadedFileMeta>> {
    let mut multipart = multipart.map_err(|rejection| {
        multipart_error(rejection.status(), limit.0, rejection.body_text())
    })?;

    let mut command = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), limit.0, e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let mut content = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e.status(), limit.0, e.body_text()))?
        {
            if content.len() + chunk.len() > limit.0 {
                return Err(AppError::PayloadTooLarge(limit.0));
            }
            content.extend_from_slice(&chunk);
        }

        command = Some(UploadManualDataCommand {
            filename,
            content: Bytes::from(content),
        });
    }

    let command = command.ok_or_else(|| {
        AppError::invalid_body(format!("No {} field found in multipart data", FILE_FIELD))
    })?;

    let meta = super::commands::upload::handle(command);

    tracing::info!(
        filename = ?meta.filename,
        content_size = meta.content_size,
        "Manual data uploaded via API"
    );

    Ok(Json(meta))
}

#[tracing::instrument(skip(command))]
async fn send_notification(
    FormPayload(command): FormPayload<SendNotificationCommand>,
) -> Json<SendNotificationResponse> {
    Json(super::commands::notify::handle(command))
}
