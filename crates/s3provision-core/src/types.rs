//! Value types passed through the façade.

use std::fmt;

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region that accepts CreateBucket without a location constraint.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether buckets created in this region need an explicit location constraint.
    #[must_use]
    pub fn requires_location_constraint(&self) -> bool {
        self.0 != Self::DEFAULT
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl From<&str> for AwsRegion {
    fn from(region: &str) -> Self {
        Self::new(region)
    }
}

impl From<String> for AwsRegion {
    fn from(region: String) -> Self {
        Self(region)
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything needed to create an access point.
///
/// None of the fields are validated locally; the control plane is the
/// authority on naming rules and on whether the bucket exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPointSpec {
    /// Bucket the access point is attached to.
    pub bucket: String,
    /// Access point name.
    pub name: String,
    /// Account that owns the access point.
    pub account_id: String,
}

impl AccessPointSpec {
    /// Create a new access point descriptor.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
            account_id: account_id.into(),
        }
    }
}

/// Access point as reported by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessPointInfo {
    /// Access point name.
    pub name: String,
    /// Bucket the access point is attached to.
    pub bucket: Option<String>,
    /// `Internet` or `VPC`.
    pub network_origin: Option<String>,
    /// Bucket-style alias of the access point.
    pub alias: Option<String>,
}
