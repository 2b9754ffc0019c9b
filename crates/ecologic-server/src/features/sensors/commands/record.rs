//! Record sensor data command
//!
//! Validates an incoming reading and stores it in the [`SensorRegistry`],
//! replacing whatever was previously stored for the same sensor.

use ecologic_common::{types::SensorReading, ValidationErrors};
use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::sensors::registry::SensorRegistry;
use crate::features::shared::validation::{
    require_object, required_number, required_string, FromPayload,
};

/// Validation contract for a single sensor reading
///
/// `sensor_id` needs at least one character, `value` must yield a finite
/// number and `timestamp` may be any string.
impl FromPayload for SensorReading {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = require_object(payload, &mut errors) else {
            return Err(errors);
        };

        let sensor_id = required_string(object, "sensor_id", 1, &mut errors);
        let value = required_number(object, "value", &mut errors);
        let timestamp = required_string(object, "timestamp", 0, &mut errors);

        match (sensor_id, value, timestamp) {
            (Some(sensor_id), Some(value), Some(timestamp)) if errors.is_empty() => {
                Ok(SensorReading::new(sensor_id, value, timestamp))
            },
            _ => Err(errors),
        }
    }
}

/// Command to record the latest reading of a sensor
///
/// # Examples
///
/// ```rust,ignore
/// use ecologic_common::types::SensorReading;
/// use ecologic_server::features::sensors::commands::RecordSensorDataCommand;
///
/// let command = RecordSensorDataCommand {
///     reading: SensorReading::new("temp-sensor-001", 25.3, "2025-01-28T15:00:00Z"),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSensorDataCommand {
    pub reading: SensorReading,
}

impl FromPayload for RecordSensorDataCommand {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        SensorReading::from_payload(payload).map(|reading| Self { reading })
    }
}

/// Acknowledgment plus the record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSensorDataResponse {
    pub message: String,
    #[serde(flatten)]
    pub reading: SensorReading,
}

// Recording cannot fail once the payload is validated
impl Request<RecordSensorDataResponse> for RecordSensorDataCommand {}

#[tracing::instrument(skip(registry, command), fields(sensor_id = %command.reading.sensor_id))]
pub async fn handle(
    registry: SensorRegistry,
    command: RecordSensorDataCommand,
) -> RecordSensorDataResponse {
    let stored = registry.put(command.reading).await;

    tracing::debug!(value = stored.value, "Sensor reading stored");

    RecordSensorDataResponse {
        message: "Sensor data received".to_string(),
        reading: stored,
    }
}
