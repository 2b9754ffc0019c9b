//! Manual data upload command
//!
//! The uploaded file is measured and dropped; nothing is stored.

use axum::body::Bytes;
use ecologic_common::types::UploadedFileMeta;
use mediator::Request;

#[derive(Debug, Clone)]
pub struct UploadManualDataCommand {
    /// Name announced by the client, if any
    pub filename: Option<String>,
    pub content: Bytes,
}

impl Request<UploadedFileMeta> for UploadManualDataCommand {}

#[tracing::instrument(skip(command), fields(filename = ?command.filename))]
pub fn handle(command: UploadManualDataCommand) -> UploadedFileMeta {
    UploadedFileMeta {
        filename: command.filename,
        content_size: command.content.len(),
    }
}
