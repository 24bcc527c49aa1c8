//! Access point creation integration tests.

#[cfg(test)]
mod tests {
    use crate::{
        LOCALSTACK_ACCOUNT_ID, cleanup_access_point, cleanup_bucket, storage_service,
        test_bucket_name,
    };

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_access_point() {
        let service = storage_service().await.expect("service");
        let bucket = test_bucket_name("ap-test-bucket");
        let access_point = test_bucket_name("my-ap");

        service.create_bucket(&bucket).await;
        assert_eq!(
            service.bucket_exists(&bucket).await,
            Ok(true),
            "precondition: bucket for access point could not be created"
        );

        assert!(
            service
                .create_access_point(&bucket, &access_point, LOCALSTACK_ACCOUNT_ID)
                .await,
            "create_access_point should return true"
        );

        let info = service
            .describe_access_point(LOCALSTACK_ACCOUNT_ID, &access_point)
            .await
            .expect("describe_access_point")
            .expect("access point should be found after creation");
        assert_eq!(info.name, access_point);
        assert_eq!(info.bucket.as_deref(), Some(bucket.as_str()));

        cleanup_access_point(&service, &access_point).await;
        cleanup_bucket(&service, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_access_point_on_missing_bucket() {
        let service = storage_service().await.expect("service");
        let bucket = test_bucket_name("nonexistent-bucket");
        let access_point = test_bucket_name("my-ap");

        assert!(
            !service
                .create_access_point(&bucket, &access_point, LOCALSTACK_ACCOUNT_ID)
                .await,
            "create_access_point should return false without a bucket"
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_none_for_unknown_access_point() {
        let service = storage_service().await.expect("service");
        let access_point = test_bucket_name("ghost-ap");

        let info = service
            .describe_access_point(LOCALSTACK_ACCOUNT_ID, &access_point)
            .await
            .expect("describe_access_point");
        assert!(info.is_none());
    }
}
