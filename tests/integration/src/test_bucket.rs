//! Bucket creation integration tests.

#[cfg(test)]
mod tests {
    use s3provision_core::StorageError;

    use crate::{cleanup_bucket, storage_service, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_bucket() {
        let service = storage_service().await.expect("service");
        let bucket = test_bucket_name("test-bucket");

        assert_eq!(service.bucket_exists(&bucket).await, Ok(false));

        assert!(
            service.create_bucket(&bucket).await,
            "create_bucket should return true for a new bucket"
        );
        assert_eq!(
            service.bucket_exists(&bucket).await,
            Ok(true),
            "bucket should be found after creation"
        );

        cleanup_bucket(&service, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_duplicate_bucket() {
        let service = storage_service().await.expect("service");
        let bucket = test_bucket_name("test-bucket");

        assert!(service.create_bucket(&bucket).await);
        assert!(
            !service.create_bucket(&bucket).await,
            "second create_bucket should return false"
        );

        let err = service.try_create_bucket(&bucket).await.unwrap_err();
        assert!(err.is_conflict(), "expected a conflict, got {err}");

        cleanup_bucket(&service, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_invalid_bucket_name() {
        let service = storage_service().await.expect("service");

        let result = service.try_create_bucket("Invalid_Bucket_Name").await;
        assert!(
            matches!(result, Err(StorageError::InvalidRequest { .. })),
            "expected invalid request, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_bucket() {
        let service = storage_service().await.expect("service");
        let bucket = test_bucket_name("delete-bucket");

        assert!(service.create_bucket(&bucket).await);
        service.delete_bucket(&bucket).await.expect("delete_bucket");
        assert_eq!(service.bucket_exists(&bucket).await, Ok(false));
    }
}
