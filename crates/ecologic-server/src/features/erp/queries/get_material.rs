use ecologic_common::types::MaterialInfo;
use mediator::Request;
use serde::{Deserialize, Serialize};

/// Look up material master data
///
/// Answered locally with fixed content; only the id is echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMaterialQuery {
    pub material_id: String,
}

impl Request<MaterialInfo> for GetMaterialQuery {}

#[tracing::instrument]
pub fn handle(query: GetMaterialQuery) -> MaterialInfo {
    MaterialInfo {
        material_id: query.material_id,
        description: "Concrete".to_string(),
        stock: 200,
        unit: "cubic meters".to_string(),
        plant: "Plant_001".to_string(),
    }
}
