//! Shopify API version handling.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated Shopify API version.
///
/// Shopify releases stable API versions quarterly, named `YYYY-MM` where the
/// month is January, April, July, or October. The special version `unstable`
/// tracks the release candidate.
///
/// # Example
///
/// ```rust
/// use sdt::config::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version.as_ref(), "2025-07");
///
/// assert!("2025-03".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub fn latest() -> Self {
        Self("2025-10".to_string())
    }

    /// Returns the unstable API version.
    #[must_use]
    pub fn unstable() -> Self {
        Self("unstable".to_string())
    }

    /// Creates a validated API version from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the value is neither a
    /// quarterly `YYYY-MM` version nor `unstable`.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();

        if version == "unstable" || Self::is_valid_quarterly(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    fn is_valid_quarterly(version: &str) -> bool {
        let Some((year, month)) = version.split_once('-') else {
            return false;
        };

        let year_ok = year.len() == 4 && year.chars().all(|c| c.is_ascii_digit());
        let month_ok = matches!(month, "01" | "04" | "07" | "10");

        year_ok && month_ok
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_quarterly_versions() {
        for v in ["2024-01", "2024-04", "2025-07", "2025-10"] {
            assert!(ApiVersion::new(v).is_ok(), "expected {v} to be valid");
        }
    }

    #[test]
    fn test_accepts_unstable() {
        let version = ApiVersion::new("unstable").unwrap();
        assert_eq!(version.as_ref(), "unstable");
    }

    #[test]
    fn test_rejects_invalid_versions() {
        for v in ["2025-03", "2025-1", "25-01", "latest", "", "2025_01"] {
            assert!(ApiVersion::new(v).is_err(), "expected {v} to be invalid");
        }
    }

    #[test]
    fn test_latest_is_valid() {
        let latest = ApiVersion::latest();
        assert!(ApiVersion::new(latest.as_ref()).is_ok());
    }
}
