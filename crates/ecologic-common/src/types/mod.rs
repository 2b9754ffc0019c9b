//! Wire records for the ECOLOGIC middleware
//!
//! These are the entities of the data model. Only [`SensorReading`] outlives a
//! request (it is kept in the server's in-memory registry). Everything else
//! is built per request and discarded after the response is written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unit reported alongside every stored sensor value
pub const SENSOR_UNIT: &str = "°C";

/// Latest measurement reported by an IoT sensor
///
/// Identity is `sensor_id`. `timestamp` is carried as an opaque string and is
/// not checked for ISO-8601 conformance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: String,
    pub value: f64,
    pub timestamp: String,
}

impl SensorReading {
    pub fn new(sensor_id: impl Into<String>, value: f64, timestamp: impl Into<String>) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            value,
            timestamp: timestamp.into(),
        }
    }
}

/// Work order submitted for forwarding to the ERP
///
/// `due_date` is an unconstrained string and is echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub work_order_id: String,
    pub description: String,
    pub cost_center: String,
    pub due_date: String,
}

/// Physical extent of a BIM object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BimDimensions {
    pub height: String,
    pub width: String,
}

/// Placement of a BIM object inside the building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BimLocation {
    pub floor: String,
    pub room: String,
}

/// Building information model object as exposed by the BIM adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BimObject {
    pub object_id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub dimensions: BimDimensions,
    pub status: String,
    pub location: BimLocation,
}

/// Material master data as exposed by the ERP adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub material_id: String,
    pub description: String,
    pub stock: u32,
    pub unit: String,
    pub plant: String,
}

/// Flat projection of an upstream `A_MaterialSerialNumber` record
///
/// Values are carried exactly as the upstream sent them, so a numeric `Plant`
/// stays a number and a missing one is `null`. `batch` and `equipment_id`
/// serialize as `null` when the upstream value was missing or falsy. They are
/// never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedSerialNumber {
    pub material: Value,
    pub serial: Value,
    pub plant: Value,
    pub location: Value,
    pub batch: Option<Value>,
    pub equipment_id: Option<Value>,
}

/// One page of simplified serial numbers plus the upstream total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialNumberList {
    pub total_count: u64,
    pub items: Vec<SimplifiedSerialNumber>,
}

/// Metadata computed from an uploaded file; the content itself is not kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFileMeta {
    pub filename: Option<String>,
    pub content_size: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bim_object_uses_type_key() {
        let object = BimObject {
            object_id: "door-001".to_string(),
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
        };

        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["type"], "Door");
        assert!(json.get("object_type").is_none());
    }

    #[test]
    fn test_absent_batch_serializes_as_null() {
        let record = SimplifiedSerialNumber {
            material: json!("M1"),
            serial: json!("S1"),
            plant: json!("P1"),
            location: json!("L1"),
            batch: None,
            equipment_id: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({
                "material": "M1",
                "serial": "S1",
                "plant": "P1",
                "location": "L1",
                "batch": null,
                "equipment_id": null
            })
        );
    }
}
