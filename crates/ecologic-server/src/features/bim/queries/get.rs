use ecologic_common::types::{BimDimensions, BimLocation, BimObject};
use mediator::Request;
use serde::{Deserialize, Serialize};

/// Fetch a BIM object by id
///
/// The BIM backend is not wired up yet: every id resolves to the same
/// synthetic door with the requested id echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBimObjectQuery {
    pub object_id: String,
}

impl Request<BimObject> for GetBimObjectQuery {}

#[tracing::instrument]
pub fn handle(query: GetBimObjectQuery) -> BimObject {
    BimObject {
        object_id: query.object_id,
        object_type: "Door".to_string(),
        dimensions: BimDimensions {
            height: "2.1m".to_string(),
            width: "0.9m".to_string(),
        },
        status: "Installed".to_string(),
        location: BimLocation {
            floor: "1st".to_string(),
            room: "101".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_id_yields_synthetic_door() {
        let object = handle(GetBimObjectQuery {
            object_id: "wall-42".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({
                "object_id": "wall-42",
                "type": "Door",
                "dimensions": {"height": "2.1m", "width": "0.9m"},
                "status": "Installed",
                "location": {"floor": "1st", "room": "101"}
            })
        );
    }
}
