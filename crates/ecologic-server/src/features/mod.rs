//! Feature modules implementing the ECOLOGIC API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes:
//!
//! - **sensors**: latest reading per IoT sensor, kept in memory
//! - **bim**: building information model objects (synthetic)
//! - **erp**: SAP material data, work orders and the serial-number passthrough
//! - **manual**: file uploads and notifications
//! - **ml**: equipment failure prediction (fixed answer)
//!
//! Commands and queries carry `mediator::Request` markers; handlers are plain
//! functions called from the routes.

pub mod bim;
pub mod erp;
pub mod manual;
pub mod ml;
pub mod sensors;
pub mod shared;

use axum::Router;

use crate::config::Config;
use erp::ErpService;
use manual::UploadLimit;
use sensors::SensorRegistry;

/// Shared state for all feature routes
///
/// Built once at startup. Cloning is cheap and every clone shares the same
/// sensor registry and ERP client.
#[derive(Debug, Clone)]
pub struct FeatureState {
    pub sensors: SensorRegistry,
    pub erp: ErpService,
    pub upload_limit: UploadLimit,
}

impl FeatureState {
    pub fn new(sensors: SensorRegistry, erp: ErpService, upload_limit: UploadLimit) -> Self {
        Self {
            sensors,
            erp,
            upload_limit,
        }
    }

    /// Production state: empty registry and an HTTP-backed ERP client
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let erp = ErpService::from_config(&config.erp)?;

        Ok(Self::new(
            SensorRegistry::new(),
            erp,
            UploadLimit(config.upload.max_bytes),
        ))
    }
}

/// Creates the router with all feature routes mounted
///
/// - `/sensor-data` - Sensor readings
/// - `/bim` - BIM objects
/// - `/erp` - ERP operations
/// - `/ml` - Predictions
/// - `/upload/manual-data`, `/notifications` - Manual processes
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/sensor-data", sensors::sensor_routes().with_state(state.sensors))
        .nest("/bim", bim::bim_routes())
        .nest("/erp", erp::erp_routes().with_state(state.erp))
        .nest("/ml", ml::ml_routes())
        .merge(manual::manual_routes(state.upload_limit).with_state(state.upload_limit))
}
