//! Update BIM object status command
//!
//! Accepts any string status, including an empty one, for any object id.
//! Nothing is persisted; the response only acknowledges the request.

use ecologic_common::ValidationErrors;
use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::shared::validation::{require_object, required_string, FromPayload};

/// Body of `PUT /bim/:object_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BimUpdate {
    pub status: String,
}

impl FromPayload for BimUpdate {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let status = require_object(payload, &mut errors)
            .and_then(|object| required_string(object, "status", 0, &mut errors));

        match status {
            Some(status) => Ok(Self { status }),
            None => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBimObjectCommand {
    pub object_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBimObjectResponse {
    pub message: String,
    pub new_status: String,
}

impl Request<UpdateBimObjectResponse> for UpdateBimObjectCommand {}

#[tracing::instrument(fields(object_id = %command.object_id))]
pub fn handle(command: UpdateBimObjectCommand) -> UpdateBimObjectResponse {
    UpdateBimObjectResponse {
        message: format!("BIM object {} updated successfully", command.object_id),
        new_status: command.status,
    }
}
