//! ERP adapter state shared by the ERP routes

use std::{sync::Arc, time::Duration};

use super::client::{ErpClient, ErpClientError, HttpErpClient};
use crate::config::{ErpConfig, ErpCredentials};

/// Configuration plus the client capability, injected once at startup
#[derive(Clone)]
pub struct ErpService {
    config: ErpConfig,
    client: Arc<dyn ErpClient>,
}

impl ErpService {
    pub fn new(config: ErpConfig, client: Arc<dyn ErpClient>) -> Self {
        Self { config, client }
    }

    /// Build the production service backed by [`HttpErpClient`]
    pub fn from_config(config: &ErpConfig) -> Result<Self, ErpClientError> {
        let client = HttpErpClient::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(config.clone(), Arc::new(client)))
    }

    pub fn credentials(&self) -> Option<ErpCredentials> {
        self.config.credentials()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn client(&self) -> &dyn ErpClient {
        self.client.as_ref()
    }
}

impl std::fmt::Debug for ErpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErpService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
