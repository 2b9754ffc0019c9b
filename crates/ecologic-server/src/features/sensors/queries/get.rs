use ecologic_common::types::{SensorReading, SENSOR_UNIT};
use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::features::sensors::registry::SensorRegistry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSensorDataQuery {
    pub sensor_id: String,
}

/// Stored reading annotated with its unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSensorDataResponse {
    #[serde(flatten)]
    pub reading: SensorReading,
    pub unit: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetSensorDataError {
    #[error("Sensor with the specified ID not found")]
    NotFound(String),
}

impl From<GetSensorDataError> for AppError {
    fn from(err: GetSensorDataError) -> Self {
        match err {
            GetSensorDataError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl Request<Result<GetSensorDataResponse, GetSensorDataError>> for GetSensorDataQuery {}

#[tracing::instrument(skip(registry))]
pub async fn handle(
    registry: SensorRegistry,
    query: GetSensorDataQuery,
) -> Result<GetSensorDataResponse, GetSensorDataError> {
    let reading = registry
        .get(&query.sensor_id)
        .await
        .ok_or(GetSensorDataError::NotFound(query.sensor_id))?;

    Ok(GetSensorDataResponse {
        reading,
        unit: SENSOR_UNIT.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_appends_unit() {
        let registry = SensorRegistry::new();
        registry
            .put(SensorReading::new("s1", 25.3, "2025-01-28T15:00:00Z"))
            .await;

        let response = handle(
            registry,
            GetSensorDataQuery {
                sensor_id: "s1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sensor_id": "s1",
                "value": 25.3,
                "timestamp": "2025-01-28T15:00:00Z",
                "unit": "°C"
            })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_sensor() {
        let result = handle(
            SensorRegistry::new(),
            GetSensorDataQuery {
                sensor_id: "ghost".to_string(),
            },
        )
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, GetSensorDataError::NotFound(ref id) if id == "ghost"));

        let app_err: AppError = err.into();
        assert_eq!(app_err.to_string(), "Sensor with the specified ID not found");
    }
}
