//! Client capability for the upstream ERP (SAP) OData service
//!
//! Handlers depend on the [`ErpClient`] trait only, so tests can substitute a
//! fake. [`HttpErpClient`] is the production implementation.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use super::odata::SerialNumberEnvelope;
use crate::config::ErpCredentials;
use crate::error::AppError;

/// Entity set listed by [`ErpClient::fetch_serial_numbers`]
pub const SERIAL_NUMBER_ENTITY_SET: &str = "A_MaterialSerialNumber";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "APIKey";

/// Paging and filtering for one serial-number request
///
/// `top` and `skip` are forwarded as given, negative values included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumberQuery {
    pub top: i64,
    pub skip: i64,
    pub filter: Option<String>,
}

impl SerialNumberQuery {
    /// OData query parameters; `$filter` only when a filter is present
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("$top", self.top.to_string()),
            ("$skip", self.skip.to_string()),
            ("$inlinecount", "allpages".to_string()),
        ];

        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            params.push(("$filter", filter.to_string()));
        }

        params
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ErpClientError {
    /// Upstream answered with a non-success status
    #[error("{body}")]
    Upstream { status: u16, body: String },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ErpClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ErpClientError::Timeout
        } else if err.is_decode() {
            ErpClientError::Decode(err.to_string())
        } else {
            ErpClientError::Transport(err.to_string())
        }
    }
}

impl From<ErpClientError> for AppError {
    fn from(err: ErpClientError) -> Self {
        match err {
            ErpClientError::Upstream { status, body } => AppError::Upstream { status, body },
            ErpClientError::Timeout => AppError::UpstreamTimeout,
            ErpClientError::Transport(_) | ErpClientError::Decode(_) => {
                AppError::UpstreamUnavailable(err.to_string())
            },
        }
    }
}

/// ERP operations the middleware depends on
#[async_trait]
pub trait ErpClient: Send + Sync {
    /// Fetch one page of `A_MaterialSerialNumber`. A single attempt, no retry.
    async fn fetch_serial_numbers(
        &self,
        credentials: &ErpCredentials,
        query: &SerialNumberQuery,
    ) -> Result<SerialNumberEnvelope, ErpClientError>;
}

/// [`ErpClient`] over HTTP with one pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpErpClient {
    client: Client,
}

impl HttpErpClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ErpClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ErpClient for HttpErpClient {
    #[tracing::instrument(skip(self, credentials), fields(base_url = %credentials.base_url))]
    async fn fetch_serial_numbers(
        &self,
        credentials: &ErpCredentials,
        query: &SerialNumberQuery,
    ) -> Result<SerialNumberEnvelope, ErpClientError> {
        let url = format!(
            "{}/{}",
            credentials.base_url.trim_end_matches('/'),
            SERIAL_NUMBER_ENTITY_SET
        );

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(header::ACCEPT, "application/json")
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "ERP rejected serial number request");
            let body = response.text().await.inspect_err(|e| {
                tracing::warn!(status = status.as_u16(), error = %e, "ERP error body unreadable")
            })?;
            return Err(ErpClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: SerialNumberEnvelope = response.json().await?;

        tracing::debug!(status = status.as_u16(), "ERP serial numbers received");

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_params_without_filter() {
        let query = SerialNumberQuery {
            top: 50,
            skip: 0,
            filter: None,
        };

        assert_eq!(
            query.params(),
            vec![
                ("$top", "50".to_string()),
                ("$skip", "0".to_string()),
                ("$inlinecount", "allpages".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_with_filter_and_negative_paging() {
        let query = SerialNumberQuery {
            top: -1,
            skip: -5,
            filter: Some("Plant eq '1010'".to_string()),
        };

        let params = query.params();
        assert_eq!(params[0], ("$top", "-1".to_string()));
        assert_eq!(params[1], ("$skip", "-5".to_string()));
        assert_eq!(params[3], ("$filter", "Plant eq '1010'".to_string()));
    }

    #[test]
    fn test_empty_filter_is_not_sent() {
        let query = SerialNumberQuery {
            top: 1,
            skip: 0,
            filter: Some(String::new()),
        };
        assert!(query.params().iter().all(|(name, _)| *name != "$filter"));
    }

    #[test]
    fn test_upstream_error_maps_verbatim() {
        let err: AppError = ErpClientError::Upstream {
            status: 503,
            body: "service unavailable".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(err, AppError::Upstream { ref body, .. } if body == "service unavailable"));
    }

    #[test]
    fn test_timeout_and_transport_mapping() {
        let timeout: AppError = ErpClientError::Timeout.into();
        assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);

        let transport: AppError = ErpClientError::Transport("connection refused".to_string()).into();
        assert_eq!(transport.status_code(), StatusCode::BAD_GATEWAY);

        let decode: AppError = ErpClientError::Decode("expected value".to_string()).into();
        assert_eq!(decode.status_code(), StatusCode::BAD_GATEWAY);
    }
}
