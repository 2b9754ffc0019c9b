//! List material serial numbers from the upstream ERP
//!
//! The only operation that leaves the process. Credentials are checked
//! before anything else, so a misconfigured deployment never issues a
//! network call.

use ecologic_common::types::SerialNumberList;
use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::features::erp::client::{ErpClientError, SerialNumberQuery};
use crate::features::erp::service::ErpService;

pub const DEFAULT_TOP: i64 = 50;
pub const DEFAULT_SKIP: i64 = 0;

/// Query string of `GET /erp/serial-numbers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSerialNumbersQuery {
    #[serde(default = "default_top")]
    pub top: i64,

    #[serde(default)]
    pub skip: i64,

    /// OData `$filter` expression; empty means no filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

fn default_top() -> i64 {
    DEFAULT_TOP
}

impl Default for ListSerialNumbersQuery {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            skip: DEFAULT_SKIP,
            filter: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListSerialNumbersError {
    #[error("SAP_API_KEY or SAP_API_BASE not configured")]
    Misconfigured,

    #[error(transparent)]
    Upstream(#[from] ErpClientError),
}

impl From<ListSerialNumbersError> for AppError {
    fn from(err: ListSerialNumbersError) -> Self {
        match err {
            ListSerialNumbersError::Misconfigured => AppError::Misconfigured(err.to_string()),
            ListSerialNumbersError::Upstream(e) => e.into(),
        }
    }
}

impl Request<Result<SerialNumberList, ListSerialNumbersError>> for ListSerialNumbersQuery {}

#[tracing::instrument(skip(erp))]
pub async fn handle(
    erp: ErpService,
    query: ListSerialNumbersQuery,
) -> Result<SerialNumberList, ListSerialNumbersError> {
    let Some(credentials) = erp.credentials() else {
        tracing::error!("ERP credentials missing, serial number listing unavailable");
        return Err(ListSerialNumbersError::Misconfigured);
    };

    let upstream_query = SerialNumberQuery {
        top: query.top,
        skip: query.skip,
        filter: query.filter.filter(|f| !f.is_empty()),
    };

    let envelope = erp
        .client()
        .fetch_serial_numbers(&credentials, &upstream_query)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Serial number listing failed"))?;

    let list = envelope.simplify();
    tracing::debug!(
        total_count = list.total_count,
        returned = list.items.len(),
        "Serial numbers listed"
    );

    Ok(list)
}
