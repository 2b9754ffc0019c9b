//! ERP API routes
//!
//! - `GET /erp/material/:material_id` - Material master data
//! - `POST /erp/work-order` - Submit a work order
//! - `GET /erp/serial-numbers?top&skip&filter` - List serial numbers from SAP

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use ecologic_common::types::{MaterialInfo, SerialNumberList};
use ecologic_common::ValidationErrors;

use super::{
    commands::{CreateWorkOrderCommand, CreateWorkOrderResponse},
    queries::{GetMaterialQuery, ListSerialNumbersQuery},
    service::ErpService,
};
use crate::error::{AppError, AppResult};
use crate::features::shared::Validated;

pub fn erp_routes() -> Router<ErpService> {
    Router::new()
        .route("/material/:material_id", get(get_material))
        .route("/work-order", post(create_work_order))
        .route("/serial-numbers", get(list_serial_numbers))
}

#[tracing::instrument]
async fn get_material(Path(material_id): Path<String>) -> Json<MaterialInfo> {
    Json(super::queries::get_material::handle(GetMaterialQuery { material_id }))
}

/// Submit a work order
///
/// # Request Body
///
/// ```json
/// {
///   "work_order_id": "WO-1001",
///   "description": "Replace HVAC filter",
///   "cost_center": "CC-200",
///   "due_date": "2025-02-15"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - Acknowledgment echoing the order
/// - `422 Unprocessable Entity` - Validation error
#[tracing::instrument(skip(command), fields(work_order_id = %command.order.work_order_id))]
async fn create_work_order(
    Validated(command): Validated<CreateWorkOrderCommand>,
) -> (StatusCode, Json<CreateWorkOrderResponse>) {
    let response = super::commands::create_work_order::handle(command);

    tracing::info!("Work order accepted via API");

    (StatusCode::CREATED, Json(response))
}

/// List serial numbers from the upstream ERP
///
/// # Query Parameters
///
/// - `top` - Page size (default: 50)
/// - `skip` - Records to skip (default: 0)
/// - `filter` - OData filter expression
///
/// # Response
///
/// - `200 OK` - `{total_count, items}`
/// - `422 Unprocessable Entity` - `top`/`skip` not integers
/// - `500 Internal Server Error` - ERP credentials not configured
/// - upstream status - upstream rejected the request, body passed through
/// - `502 Bad Gateway` / `504 Gateway Timeout` - upstream unreachable
#[tracing::instrument(skip(erp, query))]
async fn list_serial_numbers(
    State(erp): State<ErpService>,
    query: Result<Query<ListSerialNumbersQuery>, QueryRejection>,
) -> AppResult<Json<SerialNumberList>> {
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidPayload(ValidationErrors::single("query", rejection.body_text()))
    })?;

    let list = super::queries::list_serial_numbers::handle(erp, query).await?;

    Ok(Json(list))
}
