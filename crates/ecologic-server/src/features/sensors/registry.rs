//! In-memory registry of the latest reading per sensor
//!
//! Process-lifetime only: nothing is persisted and there is no expiry or
//! capacity bound. Writes replace the whole record under the write lock, so a
//! reader never observes a partially written reading. Concurrent writes to the
//! same sensor are last-write-wins.

use ecologic_common::types::SensorReading;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the sensor store; clones point at the same map
#[derive(Debug, Clone, Default)]
pub struct SensorRegistry {
    readings: Arc<RwLock<HashMap<String, SensorReading>>>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `reading`, replacing any earlier reading for the same sensor
    pub async fn put(&self, reading: SensorReading) -> SensorReading {
        let mut readings = self.readings.write().await;
        readings.insert(reading.sensor_id.clone(), reading.clone());
        reading
    }

    /// Latest reading for `sensor_id`, if one was ever stored
    pub async fn get(&self, sensor_id: &str) -> Option<SensorReading> {
        self.readings.read().await.get(sensor_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.readings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.readings.read().await.is_empty()
    }
}
