use axum::{routing::post, Json, Router};

use super::queries::{FailurePrediction, PredictEquipmentFailureQuery};
use crate::features::shared::Validated;

/// `POST /ml/predict-equipment-failure`
pub fn ml_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/predict-equipment-failure", post(predict_equipment_failure))
}

#[tracing::instrument(skip(query), fields(readings = query.readings.len()))]
async fn predict_equipment_failure(
    Validated(query): Validated<PredictEquipmentFailureQuery>,
) -> Json<FailurePrediction> {
    Json(super::queries::predict::handle(query))
}
