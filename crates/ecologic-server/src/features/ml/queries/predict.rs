//! Equipment failure prediction
//!
//! No model is trained or loaded; any batch of valid readings, including an
//! empty one, yields the same fixed prediction.

use ecologic_common::{types::SensorReading, ValidationErrors};
use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::shared::validation::FromPayload;

pub const FIXED_PREDICTION: &str = "High probability of failure";
pub const FIXED_FAILURE_PROBABILITY: f64 = 0.85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictEquipmentFailureQuery {
    pub readings: Vec<SensorReading>,
}

impl FromPayload for PredictEquipmentFailureQuery {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        Vec::<SensorReading>::from_payload(payload).map(|readings| Self { readings })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePrediction {
    pub prediction: String,
    pub failure_probability: f64,
}

impl Request<FailurePrediction> for PredictEquipmentFailureQuery {}

#[tracing::instrument(skip(query), fields(readings = query.readings.len()))]
pub fn handle(query: PredictEquipmentFailureQuery) -> FailurePrediction {
    FailurePrediction {
        prediction: FIXED_PREDICTION.to_string(),
        failure_probability: FIXED_FAILURE_PROBABILITY,
    }
}
