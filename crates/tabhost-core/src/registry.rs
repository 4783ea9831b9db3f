//! Raw records returned by the host package registry.
//!
//! These mirror what the registry reports about installed applications;
//! the policy layer turns them into [`crate::CandidateApp`]s and decisions.

use serde::{Deserialize, Serialize};

use crate::candidate::IconHandle;
use crate::ids::PackageId;

/// An application registered to handle the generic web-view action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewHandler {
    pub package: PackageId,
    pub label: String,
    pub icon: IconHandle,
}

impl ViewHandler {
    pub fn new(package: impl Into<PackageId>, label: impl Into<String>, icon: IconHandle) -> Self {
        Self {
            package: package.into(),
            label: label.into(),
            icon,
        }
    }
}

/// Declared match metadata for one handler of the generic web-view action.
///
/// A handler that declares at least one data authority *and* at least one
/// data path targets a narrow address pattern rather than a catch-all; the
/// registry's default handler must not be trusted past such a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerFilter {
    pub package: PackageId,
    /// Number of data authorities the handler's filter declares.
    pub data_authorities: u32,
    /// Number of data path patterns the handler's filter declares.
    pub data_paths: u32,
}

impl HandlerFilter {
    pub fn new(package: impl Into<PackageId>, data_authorities: u32, data_paths: u32) -> Self {
        Self {
            package: package.into(),
            data_authorities,
            data_paths,
        }
    }

    /// Whether this filter declares a narrow (non-catch-all) match.
    pub fn is_specialized(&self) -> bool {
        self.data_authorities > 0 && self.data_paths > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_authority_and_path_is_specialized() {
        assert!(HandlerFilter::new("com.site.app", 1, 2).is_specialized());
    }

    #[test]
    fn catch_all_filter_is_not_specialized() {
        assert!(!HandlerFilter::new("com.browser.a", 0, 0).is_specialized());
        // Authority without a path pattern is still a broad match.
        assert!(!HandlerFilter::new("com.browser.a", 1, 0).is_specialized());
        assert!(!HandlerFilter::new("com.browser.a", 0, 3).is_specialized());
    }
}
