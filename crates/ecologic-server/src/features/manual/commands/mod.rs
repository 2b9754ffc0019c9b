pub mod notify;
pub mod upload;

pub use notify::{SendNotificationCommand, SendNotificationResponse};
pub use upload::UploadManualDataCommand;
