//! ECOLOGIC Server Library
//!
//! REST façade in front of IoT sensors, a BIM system and an SAP ERP.
//!
//! # Overview
//!
//! - **Sensor registry**: latest reading per sensor, in process memory
//! - **ERP passthrough**: serial numbers listed from an OData upstream and
//!   reshaped into a flat projection
//! - **Stubs**: BIM objects, material data, work orders, uploads,
//!   notifications and failure predictions answered locally
//! - **Configuration**: environment variables with `.env` support
//! - **Middleware**: CORS, request tracing and compression
//!
//! # Architecture
//!
//! Features are vertical slices under [`features`], each split into
//! `commands/` (writes), `queries/` (reads) and `routes.rs`. Request bodies
//! are validated by extractors before a handler runs, and every failure is
//! rendered through [`error::AppError`].
//!
//! # Example
//!
//! ```no_run
//! use ecologic_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

pub use config::Config;
pub use error::{AppError, AppResult};
