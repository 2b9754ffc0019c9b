pub mod predict;

pub use predict::{FailurePrediction, PredictEquipmentFailureQuery};
