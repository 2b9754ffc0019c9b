//! ECOLOGIC Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, validation errors, and logging setup for the ECOLOGIC
//! middleware workspace.
//!
//! # Overview
//!
//! - **Types**: Wire records exchanged with sensors, the BIM system and the ERP
//! - **Error Handling**: Field-level validation errors
//! - **Logging**: Centralized tracing subscriber initialization
//!
//! # Example
//!
//! ```no_run
//! use ecologic_common::logging::{init_logging, LogConfig};
//! use ecologic_common::types::SensorReading;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!
//!     let reading = SensorReading::new("temp-sensor-001", 25.3, "2025-01-28T15:00:00Z");
//!     tracing::info!(sensor_id = %reading.sensor_id, "Reading built");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{FieldError, ValidationErrors};
