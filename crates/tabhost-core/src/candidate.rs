use serde::{Deserialize, Serialize};

use crate::ids::PackageId;

/// Opaque handle to an application icon owned by the host environment.
///
/// The domain never decodes icon data; it only forwards the handle to
/// whatever surface renders the chooser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconHandle(String);

impl IconHandle {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconHandle {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An installed application that can both open a generic web link and run a
/// tab-hosting background service.
///
/// Built fresh from the host registry on every resolution attempt; never
/// persisted.
///
/// 每次解析时从宿主注册表重新构建，不做持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateApp {
    /// Unique package identifier.
    pub package: PackageId,
    /// Human-readable label shown in the chooser.
    pub label: String,
    /// Icon shown next to the label.
    pub icon: IconHandle,
}

impl CandidateApp {
    pub fn new(package: impl Into<PackageId>, label: impl Into<String>, icon: IconHandle) -> Self {
        Self {
            package: package.into(),
            label: label.into(),
            icon,
        }
    }
}
