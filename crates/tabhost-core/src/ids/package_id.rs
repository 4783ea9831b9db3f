use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable application package identifier as reported by the host registry
/// (reverse-DNS style, e.g. `com.browser.a`).
///
/// This is the only key the resolution cache and listener notifications
/// carry; labels and icons are ephemeral presentation data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate package identifier format (non-empty dotted segments,
    /// alphanumeric plus underscore).
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .split('.')
                .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'))
    }
}

impl Display for PackageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PackageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PackageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
