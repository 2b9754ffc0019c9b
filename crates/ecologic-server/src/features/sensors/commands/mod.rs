pub mod record;

pub use record::{RecordSensorDataCommand, RecordSensorDataResponse};
