//! ERP (SAP) passthrough adapter

pub mod client;
pub mod commands;
pub mod odata;
pub mod queries;
pub mod routes;
pub mod service;

pub use client::{ErpClient, ErpClientError, HttpErpClient, SerialNumberQuery};
pub use commands::{CreateWorkOrderCommand, CreateWorkOrderResponse};
pub use odata::SerialNumberEnvelope;
pub use queries::{GetMaterialQuery, ListSerialNumbersError, ListSerialNumbersQuery};
pub use routes::erp_routes;
pub use service::ErpService;
