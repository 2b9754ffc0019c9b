pub mod commands;
pub mod routes;

pub use commands::{SendNotificationCommand, SendNotificationResponse, UploadManualDataCommand};
pub use routes::{manual_routes, UploadLimit};
