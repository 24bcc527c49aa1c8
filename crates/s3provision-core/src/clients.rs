//! Construction of the data-plane and control-plane SDK clients.

use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use aws_credential_types::Credentials;
use tracing::{debug, info};

use crate::config::ProvisionerConfig;
use crate::error::ConfigError;
use crate::types::AwsRegion;

/// Placeholder key pair accepted by local emulators.
const EMULATOR_ACCESS_KEY_ID: &str = "test";
const EMULATOR_SECRET_ACCESS_KEY: &str = "test";

/// The two long-lived SDK handles the façade talks to.
///
/// Both clients are `Arc`-backed, so cloning an [`AwsClients`] shares the
/// underlying connection pools rather than creating new ones.
#[derive(Debug, Clone)]
pub struct AwsClients {
    s3: aws_sdk_s3::Client,
    s3_control: aws_sdk_s3control::Client,
    region: AwsRegion,
}

impl AwsClients {
    /// Wrap already-built clients.
    #[must_use]
    pub fn new(
        s3: aws_sdk_s3::Client,
        s3_control: aws_sdk_s3control::Client,
        region: AwsRegion,
    ) -> Self {
        Self {
            s3,
            s3_control,
            region,
        }
    }

    /// Build both clients from configuration.
    ///
    /// With an endpoint override both clients are pointed at it and use the
    /// emulator placeholder credentials. Otherwise the default endpoints and
    /// the SDK default credential chain are used.
    pub async fn from_config(config: &ProvisionerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sdk_config = config_loader(config).load().await;
        Ok(Self::from_sdk_config(&sdk_config, config))
    }

    /// Build both clients from a loaded [`SdkConfig`].
    ///
    /// Path-style addressing is enabled for the data-plane client whenever
    /// an endpoint override is configured.
    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig, config: &ProvisionerConfig) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(config.has_endpoint_override())
            .build();

        Self {
            s3: aws_sdk_s3::Client::from_conf(s3_config),
            s3_control: aws_sdk_s3control::Client::new(sdk_config),
            region: config.region.clone(),
        }
    }

    /// Data-plane client (buckets and objects).
    #[must_use]
    pub fn s3(&self) -> &aws_sdk_s3::Client {
        &self.s3
    }

    /// Control-plane client (access points).
    #[must_use]
    pub fn s3_control(&self) -> &aws_sdk_s3control::Client {
        &self.s3_control
    }

    /// Region both clients are bound to.
    #[must_use]
    pub fn region(&self) -> &AwsRegion {
        &self.region
    }
}

/// Shared SDK loader for `config`: region, plus endpoint and placeholder
/// credentials when an override is set.
pub(crate) fn config_loader(config: &ProvisionerConfig) -> ConfigLoader {
    let loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.as_str().to_owned()));

    match &config.endpoint_url {
        Some(endpoint) => {
            info!(
                endpoint = %endpoint,
                region = %config.region,
                "using endpoint override with emulator credentials"
            );
            loader
                .endpoint_url(endpoint)
                .credentials_provider(emulator_credentials())
        }
        None => {
            debug!(region = %config.region, "using default endpoints and credential chain");
            loader
        }
    }
}

fn emulator_credentials() -> Credentials {
    Credentials::new(
        EMULATOR_ACCESS_KEY_ID,
        EMULATOR_SECRET_ACCESS_KEY,
        None,
        None,
        "s3provision-emulator",
    )
}
