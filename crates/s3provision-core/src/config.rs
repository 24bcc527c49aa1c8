//! Provisioner configuration.
//!
//! Provides [`ProvisionerConfig`], the settings the two SDK clients are built
//! from. Values are loaded from environment variables or assembled with the
//! generated builder.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ConfigError;
use crate::types::AwsRegion;

/// Settings for the data-plane and control-plane clients.
///
/// When `endpoint_url` is set both clients target it and authenticate with
/// fixed placeholder credentials. This is only meant for local emulators.
///
/// # Examples
///
/// ```
/// use s3provision_core::config::ProvisionerConfig;
///
/// let config = ProvisionerConfig::builder()
///     .region("eu-west-1")
///     .endpoint_url(Some("http://localhost:4566".to_owned()))
///     .build();
/// assert!(config.has_endpoint_override());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionerConfig {
    /// Region both clients are bound to.
    #[builder(default, setter(into))]
    pub region: AwsRegion,

    /// Optional endpoint override (e.g. `"http://localhost:4566"`).
    ///
    /// Control-plane requests prepend the account ID to the host
    /// (`000000000000.localhost`), so the override must be a hostname whose
    /// subdomains resolve, such as `localhost.localstack.cloud`. An IP
    /// literal works for buckets but access point calls fail DNS lookup.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            log_level: default_log_level(),
        }
    }
}

impl ProvisionerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | *(required)* |
    /// | `AWS_ENDPOINT_URL` | *(unset)* |
    /// | `LOG_LEVEL` | `info` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let region = get("AWS_REGION").ok_or(ConfigError::MissingRegion)?;

        let config = Self {
            region: AwsRegion::new(region.trim()),
            endpoint_url: get("AWS_ENDPOINT_URL").map(|v| v.trim().to_owned()),
            log_level: get("LOG_LEVEL").unwrap_or_else(default_log_level),
        };
        config.validate()?;

        Ok(config)
    }

    /// Check that the region is present and the endpoint override, if any,
    /// is an absolute URI.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.as_str().trim().is_empty() {
            return Err(ConfigError::MissingRegion);
        }

        if let Some(endpoint) = &self.endpoint_url {
            let uri = endpoint
                .parse::<http::Uri>()
                .map_err(|e| ConfigError::InvalidEndpoint {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                })?;
            if uri.scheme().is_none() || uri.authority().is_none() {
                return Err(ConfigError::InvalidEndpoint {
                    endpoint: endpoint.clone(),
                    reason: "expected scheme and host".to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Whether both clients should be redirected to a local emulator.
    #[must_use]
    pub fn has_endpoint_override(&self) -> bool {
        self.endpoint_url.is_some()
    }
}

fn default_log_level() -> String {
    String::from("info")
}
