pub mod commands;
pub mod queries;
pub mod registry;
pub mod routes;

pub use commands::{RecordSensorDataCommand, RecordSensorDataResponse};
pub use queries::{GetSensorDataError, GetSensorDataQuery, GetSensorDataResponse};
pub use registry::SensorRegistry;
pub use routes::sensor_routes;
