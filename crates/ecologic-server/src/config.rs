//! Configuration management

use serde::{Deserialize, Serialize};

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default CORS allowed origin for local development.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default timeout for calls to the upstream ERP service, in seconds.
pub const DEFAULT_ERP_TIMEOUT_SECS: u64 = 10;

/// Default cap on uploaded manual data files (10 MiB).
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub erp: ErpConfig,
    pub upload: UploadConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

/// Upstream ERP (SAP) connection settings
///
/// Key and base URL are optional at load time. Their absence is reported per
/// request by the serial-number listing, never as a startup failure.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct ErpConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

/// Credentials needed to reach the ERP, present only when fully configured
#[derive(Clone, PartialEq, Eq)]
pub struct ErpCredentials {
    pub api_key: String,
    pub base_url: String,
}

/// Manual upload limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

impl ErpConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: Some(base_url.into()),
            timeout_secs: DEFAULT_ERP_TIMEOUT_SECS,
        }
    }

    /// Returns the credentials if both the key and the base URL are non-empty
    pub fn credentials(&self) -> Option<ErpCredentials> {
        let api_key = self.api_key.as_deref().filter(|s| !s.is_empty())?;
        let base_url = self.base_url.as_deref().filter(|s| !s.is_empty())?;

        Some(ErpCredentials {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

// The API key must never reach the logs.
impl std::fmt::Debug for ErpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErpConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for ErpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErpCredentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

impl Config {
    /// Load configuration from `.env`, the environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            server: ServerConfig {
                host: lookup("ECOLOGIC_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: parse_or(lookup("ECOLOGIC_PORT"), DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: parse_or(
                    lookup("ECOLOGIC_SHUTDOWN_TIMEOUT"),
                    DEFAULT_SHUTDOWN_TIMEOUT_SECS,
                ),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: parse_or(lookup("CORS_ALLOW_CREDENTIALS"), false),
            },
            erp: ErpConfig {
                api_key: lookup("SAP_API_KEY"),
                base_url: lookup("SAP_API_BASE"),
                timeout_secs: parse_or(lookup("SAP_API_TIMEOUT_SECS"), DEFAULT_ERP_TIMEOUT_SECS),
            },
            upload: UploadConfig {
                max_bytes: parse_or(lookup("UPLOAD_MAX_BYTES"), DEFAULT_UPLOAD_MAX_BYTES),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.erp.timeout_secs == 0 {
            anyhow::bail!("SAP_API_TIMEOUT_SECS must be greater than 0");
        }

        if self.upload.max_bytes == 0 {
            anyhow::bail!("UPLOAD_MAX_BYTES must be greater than 0");
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        if !self.erp.is_configured() {
            tracing::warn!(
                "SAP_API_KEY or SAP_API_BASE not configured - serial number listing will fail"
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: false,
            },
            erp: ErpConfig {
                api_key: None,
                base_url: None,
                timeout_secs: DEFAULT_ERP_TIMEOUT_SECS,
            },
            upload: UploadConfig {
                max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
            },
        }
    }
}
