//! OData v2 envelope of the `A_MaterialSerialNumber` entity set
//!
//! The upstream wraps every page as `{"d": {"results": [...], "__count": "N"}}`.
//! Decoding is lenient: a missing `d` or `results` is an empty page, a missing
//! `__count` is zero, and every record field is optional. Record values are
//! passed through untouched, whatever their JSON type.

use ecologic_common::types::{SerialNumberList, SimplifiedSerialNumber};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Top-level response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerialNumberEnvelope {
    #[serde(default)]
    pub d: Option<SerialNumberPage>,
}

/// Contents of `d`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerialNumberPage {
    #[serde(default)]
    pub results: Option<Vec<RawSerialNumber>>,

    /// Total across all pages; OData v2 sends it as a string
    #[serde(default, rename = "__count", deserialize_with = "count_from_number_or_string")]
    pub count: u64,
}

/// One upstream record as received
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSerialNumber {
    #[serde(default)]
    pub material: Option<Value>,
    #[serde(default)]
    pub serial_number: Option<Value>,
    #[serde(default)]
    pub plant: Option<Value>,
    #[serde(default)]
    pub storage_location: Option<Value>,
    #[serde(default)]
    pub batch: Option<Value>,
    #[serde(default)]
    pub equipment: Option<Value>,
}

fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => whole_count(&n)
            .ok_or_else(|| de::Error::custom(format!("invalid __count: {}", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid __count: {:?}", s))),
        Some(other) => Err(de::Error::custom(format!("invalid __count: {}", other))),
    }
}

/// Non-negative integer value of `n`; whole floats such as `2.0` qualify
fn whole_count(n: &serde_json::Number) -> Option<u64> {
    if let Some(count) = n.as_u64() {
        return Some(count);
    }

    let f = n.as_f64()?;
    if f.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&f) {
        Some(f as u64)
    } else {
        None
    }
}

/// Value as received, `null` when absent
fn passthrough(value: &Option<Value>) -> Value {
    value.clone().unwrap_or(Value::Null)
}

/// Value as received, `None` when absent or falsy
fn present(value: &Option<Value>) -> Option<Value> {
    let is_falsy = match value.as_ref()? {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    };

    if is_falsy {
        None
    } else {
        value.clone()
    }
}

impl RawSerialNumber {
    /// Rename fields 1:1; blank `Batch`/`Equipment` become absent
    pub fn simplify(&self) -> SimplifiedSerialNumber {
        SimplifiedSerialNumber {
            material: passthrough(&self.material),
            serial: passthrough(&self.serial_number),
            plant: passthrough(&self.plant),
            location: passthrough(&self.storage_location),
            batch: present(&self.batch),
            equipment_id: present(&self.equipment),
        }
    }
}

impl SerialNumberEnvelope {
    /// Project the page into the simplified listing, preserving upstream order
    pub fn simplify(&self) -> SerialNumberList {
        let Some(page) = self.d.as_ref() else {
            return SerialNumberList {
                total_count: 0,
                items: Vec::new(),
            };
        };

        SerialNumberList {
            total_count: page.count,
            items: page
                .results
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(RawSerialNumber::simplify)
                .collect(),
        }
    }
}
