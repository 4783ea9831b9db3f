use serde::{Deserialize, Serialize};

use crate::ids::PackageId;

/// Outcome of one `resolve_package` call.
///
/// `Pending` means a chooser has been presented and the real result will
/// arrive later through listener notification; the caller is never parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A single tab-hosting package was determined.
    Resolved(PackageId),
    /// No installed application qualifies; callers should invoke the
    /// link fallback instead.
    Unavailable,
    /// Several packages qualify and no default applies; a human is being
    /// asked to disambiguate.
    Pending,
}

/// Value held by the one-shot resolution cache.
///
/// Once written, the slot is final for the service lifetime. `Unavailable`
/// is cached too: a tab-hosting browser installed later in the same process
/// is deliberately not picked up.
///
/// 一旦写入即为最终结果；“无可用应用”同样会被缓存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachedOutcome {
    Package(PackageId),
    Unavailable,
}

impl CachedOutcome {
    /// Project the cached slot back onto the public outcome type.
    pub fn to_resolution(&self) -> Resolution {
        match self {
            CachedOutcome::Package(pkg) => Resolution::Resolved(pkg.clone()),
            CachedOutcome::Unavailable => Resolution::Unavailable,
        }
    }
}
