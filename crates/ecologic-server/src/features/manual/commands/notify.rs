use mediator::Request;
use serde::{Deserialize, Serialize};

/// Form body of `POST /notifications`
///
/// Both fields must be present; neither is checked further, so an empty or
/// malformed email address is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationCommand {
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationResponse {
    pub message: String,
    pub content: String,
}

impl Request<SendNotificationResponse> for SendNotificationCommand {}

// No delivery backend exists yet; the notification is only acknowledged.
#[tracing::instrument(skip(command))]
pub fn handle(command: SendNotificationCommand) -> SendNotificationResponse {
    SendNotificationResponse {
        message: format!("Notification sent to {}", command.email),
        content: command.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgment_wording() {
        let response = handle(SendNotificationCommand {
            email: "ops@example.com".to_string(),
            message: "Door 101 sensor offline".to_string(),
        });

        assert_eq!(response.message, "Notification sent to ops@example.com");
        assert_eq!(response.content, "Door 101 sensor offline");
    }
}
