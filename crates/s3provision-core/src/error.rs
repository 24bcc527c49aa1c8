//! Error types for configuration and for remote storage calls.
//!
//! [`StorageError`] is the discriminated outcome of a failed façade call.
//! Every SDK failure is folded into one of its variants by
//! [`StorageError::from_sdk`], so callers can tell a conflict from a
//! transient failure without inspecting SDK types.

use std::error::Error as StdError;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::SdkError;

/// Configuration and startup errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No region was supplied.
    #[error("AWS region is required (set AWS_REGION)")]
    MissingRegion,

    /// The endpoint override is not an absolute URI.
    #[error("invalid endpoint override {endpoint}: {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The log level is not a valid tracing filter.
    #[error("invalid log level filter: {0}")]
    InvalidLogLevel(String),

    /// A global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(String),
}

/// Failure reported by the remote storage service or the SDK transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The bucket name is taken by another account.
    #[error("bucket already exists: {bucket}")]
    BucketAlreadyExists {
        /// The requested bucket.
        bucket: String,
    },

    /// The bucket already exists and belongs to the caller.
    #[error("bucket already owned by you: {bucket}")]
    BucketAlreadyOwnedByYou {
        /// The requested bucket.
        bucket: String,
    },

    /// The bucket does not exist.
    #[error("no such bucket: {bucket}")]
    NoSuchBucket {
        /// The requested bucket.
        bucket: String,
    },

    /// An access point with this name already exists in the account.
    #[error("access point already exists: {message}")]
    AccessPointAlreadyExists {
        /// Message reported by the service.
        message: String,
    },

    /// The caller is not authorized.
    #[error("access denied: {message}")]
    AccessDenied {
        /// Message reported by the service.
        message: String,
    },

    /// The service is throttling requests.
    #[error("request throttled: {message}")]
    Throttled {
        /// Message reported by the service.
        message: String,
    },

    /// The request was malformed, either locally or as judged by the service.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Detail of the rejection.
        message: String,
    },

    /// The request never produced a service response.
    #[error("transport failure: {message}")]
    Transport {
        /// Detail of the failure.
        message: String,
    },

    /// Any other service error.
    #[error("service error {code}: {message}")]
    Service {
        /// Error code reported by the service.
        code: String,
        /// Message reported by the service.
        message: String,
    },
}

/// Convenience result type for façade operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Classify an SDK error.
    ///
    /// `bucket` is the bucket the request targeted, when the operation has
    /// one; bucket-specific codes without it are kept as [`Self::Service`].
    #[must_use]
    pub fn from_sdk<E>(err: &SdkError<E, HttpResponse>, bucket: Option<&str>) -> Self
    where
        E: ProvideErrorMetadata + StdError + 'static,
    {
        match err {
            SdkError::ServiceError(_) => {
                let status = err.raw_response().map(|resp| resp.status().as_u16());
                Self::from_response(err.code(), err.message(), status, bucket)
            }
            SdkError::ConstructionFailure(_) => Self::InvalidRequest {
                message: DisplayErrorContext(err).to_string(),
            },
            _ => Self::Transport {
                message: DisplayErrorContext(err).to_string(),
            },
        }
    }

    /// Classify a service response, falling back to the HTTP status when
    /// the body carried no error code (HEAD responses never do).
    #[must_use]
    pub fn from_response(
        code: Option<&str>,
        message: Option<&str>,
        status: Option<u16>,
        bucket: Option<&str>,
    ) -> Self {
        if code.is_some() {
            return Self::from_code(code, message, bucket);
        }

        let fallback = match status {
            Some(403) => "AccessDenied",
            Some(404) => "NotFound",
            Some(429 | 503) => "SlowDown",
            _ => return Self::from_code(None, message, bucket),
        };
        Self::from_code(Some(fallback), message, bucket)
    }

    /// Classify a service error code.
    #[must_use]
    pub fn from_code(code: Option<&str>, message: Option<&str>, bucket: Option<&str>) -> Self {
        let message = message.unwrap_or_default().to_owned();

        match (code, bucket) {
            (Some("BucketAlreadyExists"), Some(bucket)) => Self::BucketAlreadyExists {
                bucket: bucket.to_owned(),
            },
            (Some("BucketAlreadyOwnedByYou"), Some(bucket)) => Self::BucketAlreadyOwnedByYou {
                bucket: bucket.to_owned(),
            },
            (Some("NoSuchBucket" | "NotFound"), Some(bucket)) => Self::NoSuchBucket {
                bucket: bucket.to_owned(),
            },
            (Some("AccessPointAlreadyOwnedByYou" | "AccessPointAlreadyExists"), _) => {
                Self::AccessPointAlreadyExists { message }
            }
            (Some("AccessDenied" | "AccessDeniedException" | "Forbidden"), _) => {
                Self::AccessDenied { message }
            }
            (
                Some(
                    "SlowDown"
                    | "Throttling"
                    | "ThrottlingException"
                    | "TooManyRequests"
                    | "TooManyRequestsException"
                    | "RequestLimitExceeded",
                ),
                _,
            ) => Self::Throttled { message },
            (
                Some(
                    "InvalidBucketName"
                    | "InvalidRequest"
                    | "InvalidArgument"
                    | "InvalidAccessPointName"
                    | "MalformedXML",
                ),
                _,
            ) => Self::InvalidRequest { message },
            (Some(code), _) => Self::Service {
                code: code.to_owned(),
                message,
            },
            (None, _) => Self::Service {
                code: "Unknown".to_owned(),
                message,
            },
        }
    }

    /// Whether the same request might succeed if sent again later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Throttled { .. } | Self::Transport { .. })
    }

    /// Whether the failure means the resource is already there.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::BucketAlreadyExists { .. }
                | Self::BucketAlreadyOwnedByYou { .. }
                | Self::AccessPointAlreadyExists { .. }
        )
    }
}
