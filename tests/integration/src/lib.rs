//! Integration tests for s3provision against a LocalStack-compatible emulator.
//!
//! These tests require a running emulator that serves both S3 and S3 Control
//! (LocalStack does). They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p s3provision-integration -- --ignored
//! ```
//!
//! The control-plane client prefixes the endpoint host with the account ID,
//! so the default endpoint uses `localhost.localstack.cloud`, whose
//! subdomains all resolve to loopback.

use std::sync::Once;

use anyhow::Context;
use s3provision_core::{AwsClients, ProvisionerConfig, StorageService, telemetry};

static INIT: Once = Once::new();

/// Account ID LocalStack assigns to every request.
pub const LOCALSTACK_ACCOUNT_ID: &str = "000000000000";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        telemetry::init_test_tracing("warn").expect("install test subscriber");
    });
}

/// Endpoint URL for the emulator.
fn endpoint_url() -> String {
    std::env::var("S3_ENDPOINT_URL")
        .unwrap_or_else(|_| "http://localhost.localstack.cloud:4566".to_owned())
}

/// Configuration pointing both clients at the emulator.
///
/// Uses `eu-west-1`: in `us-east-1` re-creating a bucket you already own
/// succeeds, so the duplicate-bucket scenario needs another region.
#[must_use]
pub fn emulator_config() -> ProvisionerConfig {
    ProvisionerConfig::builder()
        .region("eu-west-1")
        .endpoint_url(Some(endpoint_url()))
        .build()
}

/// Create a storage service wired to the emulator.
pub async fn storage_service() -> anyhow::Result<StorageService> {
    init_tracing();

    let clients = AwsClients::from_config(&emulator_config())
        .await
        .context("failed to build emulator clients")?;
    Ok(StorageService::new(clients))
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("{prefix}-{id}")
}

/// Delete an access point, ignoring failures.
pub async fn cleanup_access_point(service: &StorageService, name: &str) {
    if let Err(e) = service
        .delete_access_point(LOCALSTACK_ACCOUNT_ID, name)
        .await
    {
        tracing::warn!(access_point = %name, error = %e, "access point cleanup failed");
    }
}

/// Delete a bucket, ignoring failures.
pub async fn cleanup_bucket(service: &StorageService, bucket: &str) {
    if let Err(e) = service.delete_bucket(bucket).await {
        tracing::warn!(bucket = %bucket, error = %e, "bucket cleanup failed");
    }
}

mod test_access_point;
mod test_bucket;
