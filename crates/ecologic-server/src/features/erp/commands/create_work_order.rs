//! Create work order command
//!
//! Validates a work order and acknowledges it as forwarded to SAP. No
//! upstream call is made and nothing is stored, so submitting the same order
//! twice yields two identical acknowledgments.

use ecologic_common::{types::WorkOrder, ValidationErrors};
use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::shared::validation::{require_object, required_string, FromPayload};

/// `work_order_id`, `description` and `cost_center` need at least one
/// character; `due_date` is any string and is echoed verbatim.
impl FromPayload for WorkOrder {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = require_object(payload, &mut errors) else {
            return Err(errors);
        };

        let work_order_id = required_string(object, "work_order_id", 1, &mut errors);
        let description = required_string(object, "description", 1, &mut errors);
        let cost_center = required_string(object, "cost_center", 1, &mut errors);
        let due_date = required_string(object, "due_date", 0, &mut errors);

        match (work_order_id, description, cost_center, due_date) {
            (Some(work_order_id), Some(description), Some(cost_center), Some(due_date)) => {
                Ok(WorkOrder {
                    work_order_id,
                    description,
                    cost_center,
                    due_date,
                })
            },
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkOrderCommand {
    pub order: WorkOrder,
}

impl FromPayload for CreateWorkOrderCommand {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        WorkOrder::from_payload(payload).map(|order| Self { order })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkOrderResponse {
    pub message: String,
    pub description: String,
    pub cost_center: String,
    pub due_date: String,
}

impl Request<CreateWorkOrderResponse> for CreateWorkOrderCommand {}

#[tracing::instrument(skip(command), fields(work_order_id = %command.order.work_order_id))]
pub fn handle(command: CreateWorkOrderCommand) -> CreateWorkOrderResponse {
    let WorkOrder {
        work_order_id,
        description,
        cost_center,
        due_date,
    } = command.order;

    CreateWorkOrderResponse {
        message: format!("Work Order {} created in SAP", work_order_id),
        description,
        cost_center,
        due_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_due_date_is_echoed_verbatim() {
        let command = CreateWorkOrderCommand::from_payload(&json!({
            "work_order_id": "WO-1001",
            "description": "Replace HVAC filter",
            "cost_center": "CC-200",
            "due_date": "not-a-date"
        }))
        .unwrap();

        let response = handle(command);
        assert_eq!(response.message, "Work Order WO-1001 created in SAP");
        assert_eq!(response.due_date, "not-a-date");
        assert_eq!(response.cost_center, "CC-200");
    }

    #[test]
    fn test_empty_identifiers_are_rejected() {
        let errors = WorkOrder::from_payload(&json!({
            "work_order_id": "",
            "description": "",
            "cost_center": "",
            "due_date": ""
        }))
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("work_order_id"));
        assert!(errors.has_field("description"));
        assert!(errors.has_field("cost_center"));
        assert!(!errors.has_field("due_date"));
    }

    #[test]
    fn test_missing_due_date_is_rejected() {
        let errors = WorkOrder::from_payload(&json!({
            "work_order_id": "WO-1",
            "description": "d",
            "cost_center": "c"
        }))
        .unwrap_err();

        assert!(errors.has_field("due_date"));
    }
}
