pub mod get;

pub use get::{GetSensorDataError, GetSensorDataQuery, GetSensorDataResponse};
