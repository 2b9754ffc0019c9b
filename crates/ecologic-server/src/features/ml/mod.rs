//! Equipment failure prediction stub

pub mod queries;
pub mod routes;

pub use queries::{FailurePrediction, PredictEquipmentFailureQuery};
pub use routes::ml_routes;
