//! BigCommerce API version definitions.
//!
//! The REST API is split by major version rather than by release date: blog
//! content lives under `v2`, the catalog under `v3`. The two generations
//! also differ in envelope and pagination conventions, which is why each
//! resource declares the version it belongs to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// BigCommerce REST API version.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(format!("{}", ApiVersion::V2), "v2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// Legacy API: bare JSON bodies, count-based pagination.
    V2,
    /// Current API: `data`/`meta` envelopes, explicit page metadata.
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` for versions that wrap payloads in a `data` envelope.
    #[must_use]
    pub const fn uses_envelope(self) -> bool {
        matches!(self, Self::V3)
    }

    /// Returns the path segment for this version (`"v2"` or `"v3"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
