//! BIM API routes
//!
//! - `GET /bim/:object_id` - Describe a BIM object
//! - `PUT /bim/:object_id` - Update the status of a BIM object

use axum::{extract::Path, routing::get, Json, Router};
use ecologic_common::types::BimObject;

use super::{
    commands::{BimUpdate, UpdateBimObjectCommand, UpdateBimObjectResponse},
    queries::GetBimObjectQuery,
};
use crate::features::shared::Validated;

pub fn bim_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/:object_id", get(get_bim_object).put(update_bim_object))
}

#[tracing::instrument]
async fn get_bim_object(Path(object_id): Path<String>) -> Json<BimObject> {
    Json(super::queries::get::handle(GetBimObjectQuery { object_id }))
}

/// Update a BIM object's status
///
/// # Request Body
///
/// ```json
/// { "status": "Installed" }
/// ```
///
/// # Response
///
/// - `200 OK` - Acknowledgment with the new status
/// - `422 Unprocessable Entity` - `status` missing or not a string
#[tracing::instrument(skip(update))]
async fn update_bim_object(
    Path(object_id): Path<String>,
    Validated(update): Validated<BimUpdate>,
) -> Json<UpdateBimObjectResponse> {
    let response = super::commands::update::handle(UpdateBimObjectCommand {
        object_id,
        status: update.status,
    });

    tracing::info!(new_status = %response.new_status, "BIM object status updated via API");

    Json(response)
}
