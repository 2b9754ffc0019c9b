//! Sensor API routes
//!
//! - `POST /sensor-data` - Record the latest reading of a sensor
//! - `GET /sensor-data/:sensor_id` - Fetch the latest reading with its unit

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use super::{
    commands::{RecordSensorDataCommand, RecordSensorDataResponse},
    queries::{GetSensorDataQuery, GetSensorDataResponse},
    registry::SensorRegistry,
};
use crate::error::AppResult;
use crate::features::shared::Validated;

/// Creates the sensor router
///
/// # Examples
///
/// ```rust,ignore
/// use axum::Router;
/// use ecologic_server::features::sensors::{sensor_routes, SensorRegistry};
///
/// let app: Router = Router::new()
///     .nest("/sensor-data", sensor_routes())
///     .with_state(SensorRegistry::new());
/// ```
pub fn sensor_routes() -> Router<SensorRegistry> {
    Router::new()
        .route("/", post(record_sensor_data))
        .route("/:sensor_id", get(get_sensor_data))
}

/// Record a sensor reading
///
/// # Request Body
///
/// ```json
/// {
///   "sensor_id": "temp-sensor-001",
///   "value": 25.3,
///   "timestamp": "2025-01-28T15:00:00Z"
/// }
/// ```
///
/// # Response
///
/// - `200 OK` - Reading stored, echoed with an acknowledgment
/// - `422 Unprocessable Entity` - Validation error
#[tracing::instrument(skip(registry, command), fields(sensor_id = %command.reading.sensor_id))]
async fn record_sensor_data(
    State(registry): State<SensorRegistry>,
    Validated(command): Validated<RecordSensorDataCommand>,
) -> Json<RecordSensorDataResponse> {
    let response = super::commands::record::handle(registry, command).await;

    tracing::info!(value = response.reading.value, "Sensor data recorded via API");

    Json(response)
}

/// Get the latest reading of a sensor
///
/// # Response
///
/// - `200 OK` - Reading found
/// - `404 Not Found` - No reading was ever stored for this sensor
#[tracing::instrument(skip(registry))]
async fn get_sensor_data(
    State(registry): State<SensorRegistry>,
    Path(sensor_id): Path<String>,
) -> AppResult<Json<GetSensorDataResponse>> {
    let response = super::queries::get::handle(registry, GetSensorDataQuery { sensor_id }).await?;

    Ok(Json(response))
}
