//! Bucket and access point provisioning over the AWS SDK.
//!
//! This crate wraps two SDK clients, one for the S3 data plane and one for
//! the S3 Control plane, behind a small façade. Every façade call issues
//! exactly one SDK request; failures are classified into [`StorageError`]
//! and never retried.
//!
//! # Architecture
//!
//! ```text
//! ProvisionerConfig (env / builder)
//!        |
//!        v
//!   AwsClients (aws_sdk_s3::Client + aws_sdk_s3control::Client)
//!        |
//!        v
//!   StorageService (create bucket, create access point, lookups)
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use s3provision_core::{AwsClients, ProvisionerConfig, StorageService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProvisionerConfig::from_env()?;
//! let clients = AwsClients::from_config(&config).await?;
//! let service = StorageService::new(clients);
//!
//! if service.create_bucket("my-bucket").await {
//!     service
//!         .create_access_point("my-bucket", "my-ap", "000000000000")
//!         .await;
//! }
//! # Ok(())
//! # }
//! ```

mod clients;
pub mod config;
pub mod error;
mod service;
pub mod telemetry;
mod types;

pub use clients::AwsClients;
pub use config::ProvisionerConfig;
pub use error::{ConfigError, StorageError, StorageResult};
pub use service::StorageService;
pub use types::{AccessPointInfo, AccessPointSpec, AwsRegion};
