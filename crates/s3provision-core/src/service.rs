//! Storage façade over the data-plane and control-plane clients.
//!
//! Each operation issues exactly one SDK request. Nothing is retried; a
//! failure is classified into [`StorageError`], logged, and returned. The
//! boolean operations collapse that result to `true`/`false`.

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::SdkError;
use tracing::{debug, error, info};

use crate::clients::AwsClients;
use crate::error::{StorageError, StorageResult};
use crate::types::{AccessPointInfo, AccessPointSpec};

/// Bucket and access point operations.
///
/// Cloning is cheap; all clones share the same SDK clients.
#[derive(Debug, Clone)]
pub struct StorageService {
    clients: AwsClients,
}

impl StorageService {
    /// Create a façade over the given clients.
    #[must_use]
    pub fn new(clients: AwsClients) -> Self {
        Self { clients }
    }

    /// The underlying client pair.
    #[must_use]
    pub fn clients(&self) -> &AwsClients {
        &self.clients
    }

    /// Create a bucket, reporting only whether it succeeded.
    ///
    /// Every failure, including "already exists", yields `false`; the cause
    /// is only visible in the logs. Use [`Self::try_create_bucket`] to see it.
    ///
    /// In `us-east-1` the service answers a repeated create of a bucket you
    /// already own with success, so this returns `true` there. Every other
    /// region reports `BucketAlreadyOwnedByYou`.
    pub async fn create_bucket(&self, bucket: &str) -> bool {
        self.try_create_bucket(bucket).await.is_ok()
    }

    /// Create a bucket.
    ///
    /// Outside `us-east-1` the client region is sent as the location
    /// constraint.
    pub async fn try_create_bucket(&self, bucket: &str) -> StorageResult<()> {
        info!(bucket = %bucket, "creating bucket");

        let region = self.clients.region();
        let mut request = self.clients.s3().create_bucket().bucket(bucket);
        if region.requires_location_constraint() {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region.as_str()))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => {
                info!(bucket = %bucket, "created bucket");
                Ok(())
            }
            Err(err) => {
                let classified = classify_create_bucket(&err, bucket);
                error!(
                    bucket = %bucket,
                    error = %classified,
                    detail = %DisplayErrorContext(&err),
                    "failed to create bucket"
                );
                Err(classified)
            }
        }
    }

    /// Create an access point, reporting only whether it succeeded.
    ///
    /// The bucket must already exist; this is not checked locally.
    pub async fn create_access_point(
        &self,
        bucket: &str,
        access_point: &str,
        account_id: &str,
    ) -> bool {
        let spec = AccessPointSpec::new(bucket, access_point, account_id);
        self.try_create_access_point(&spec).await.is_ok()
    }

    /// Create an access point on `spec.bucket`, owned by `spec.account_id`.
    pub async fn try_create_access_point(&self, spec: &AccessPointSpec) -> StorageResult<()> {
        info!(
            access_point = %spec.name,
            bucket = %spec.bucket,
            account_id = %spec.account_id,
            "creating access point"
        );

        let result = self
            .clients
            .s3_control()
            .create_access_point()
            .account_id(&spec.account_id)
            .name(&spec.name)
            .bucket(&spec.bucket)
            .send()
            .await;

        match result {
            Ok(output) => {
                info!(
                    access_point = %spec.name,
                    arn = output.access_point_arn().unwrap_or_default(),
                    "created access point"
                );
                Ok(())
            }
            Err(err) => {
                let classified = StorageError::from_sdk(&err, Some(spec.bucket.as_str()));
                error!(
                    access_point = %spec.name,
                    bucket = %spec.bucket,
                    error = %classified,
                    detail = %DisplayErrorContext(&err),
                    "failed to create access point"
                );
                Err(classified)
            }
        }
    }

    /// Check whether a bucket exists and is reachable with these credentials.
    pub async fn bucket_exists(&self, bucket: &str) -> StorageResult<bool> {
        match self.clients.s3().head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let not_found = err
                    .as_service_error()
                    .is_some_and(HeadBucketError::is_not_found)
                    || err
                        .raw_response()
                        .is_some_and(|resp| resp.status().as_u16() == 404);
                if not_found {
                    debug!(bucket = %bucket, "bucket not found");
                    Ok(false)
                } else {
                    Err(StorageError::from_sdk(&err, Some(bucket)))
                }
            }
        }
    }

    /// Look up an access point by name within an account.
    ///
    /// Returns `Ok(None)` when the control plane reports `NoSuchAccessPoint`.
    pub async fn describe_access_point(
        &self,
        account_id: &str,
        access_point: &str,
    ) -> StorageResult<Option<AccessPointInfo>> {
        let result = self
            .clients
            .s3_control()
            .get_access_point()
            .account_id(account_id)
            .name(access_point)
            .send()
            .await;

        match result {
            Ok(output) => Ok(Some(AccessPointInfo {
                name: output.name().unwrap_or(access_point).to_owned(),
                bucket: output.bucket().map(ToOwned::to_owned),
                network_origin: output.network_origin().map(|o| o.as_str().to_owned()),
                alias: output.alias().map(ToOwned::to_owned),
            })),
            Err(err) if err.code() == Some("NoSuchAccessPoint") => {
                debug!(access_point = %access_point, account_id = %account_id, "access point not found");
                Ok(None)
            }
            Err(err) => Err(StorageError::from_sdk(&err, None)),
        }
    }

    /// Delete an access point.
    pub async fn delete_access_point(&self, account_id: &str, access_point: &str) -> StorageResult<()> {
        self.clients
            .s3_control()
            .delete_access_point()
            .account_id(account_id)
            .name(access_point)
            .send()
            .await
            .map_err(|err| StorageError::from_sdk(&err, None))?;

        debug!(access_point = %access_point, account_id = %account_id, "deleted access point");
        Ok(())
    }

    /// Delete an empty bucket.
    pub async fn delete_bucket(&self, bucket: &str) -> StorageResult<()> {
        self.clients
            .s3()
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| StorageError::from_sdk(&err, Some(bucket)))?;

        debug!(bucket = %bucket, "deleted bucket");
        Ok(())
    }
}

/// Modeled CreateBucket errors carry no error code, so match the variant first.
fn classify_create_bucket(
    err: &SdkError<CreateBucketError, HttpResponse>,
    bucket: &str,
) -> StorageError {
    match err.as_service_error() {
        Some(e) if e.is_bucket_already_owned_by_you() => StorageError::BucketAlreadyOwnedByYou {
            bucket: bucket.to_owned(),
        },
        Some(e) if e.is_bucket_already_exists() => StorageError::BucketAlreadyExists {
            bucket: bucket.to_owned(),
        },
        _ => StorageError::from_sdk(err, Some(bucket)),
    }
}
