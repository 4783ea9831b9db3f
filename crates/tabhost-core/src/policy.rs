//! Deterministic host-selection policy.
//!
//! Pure functions only; the service layer owns caching, chooser
//! presentation, and listener fan-out.
//!
//! 纯决策函数：缓存、选择器展示与监听器通知由服务层负责。

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateApp;
use crate::ids::PackageId;
use crate::registry::HandlerFilter;

/// What the policy concluded for one set of qualifying candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostDecision {
    /// No candidate both handles web views and exposes a tab-hosting service.
    Unavailable,
    /// Exactly one candidate qualifies.
    Single(PackageId),
    /// Several qualify, but the registry's own default web-view handler is a
    /// plain browser (not specialized) and is among them, so trust it.
    PreferDefault(PackageId),
    /// Several qualify and no default applies; a human has to choose.
    NeedsChoice,
}

/// Decide which tab-hosting package to use, given the already-probed
/// candidate set.
///
/// `default_is_specialized` reports whether *any* handler of the generic
/// web-view action declares a narrow match (see
/// [`has_specialized_handler`]); when true, the registry default cannot be
/// trusted to represent "the user's browser" and the shortcut is skipped.
pub fn decide(
    candidates: &[CandidateApp],
    default_handler: Option<&PackageId>,
    default_is_specialized: bool,
) -> HostDecision {
    if candidates.is_empty() {
        return HostDecision::Unavailable;
    }
    if candidates.len() == 1 {
        return HostDecision::Single(candidates[0].package.clone());
    }
    if let Some(default_pkg) = default_handler {
        if !default_is_specialized && candidates.iter().any(|c| &c.package == default_pkg) {
            return HostDecision::PreferDefault(default_pkg.clone());
        }
    }
    HostDecision::NeedsChoice
}

/// Whether any handler of the generic web-view action declares a
/// specialized (authority + path) match.
pub fn has_specialized_handler(filters: &[HandlerFilter]) -> bool {
    filters.iter().any(|f| f.is_specialized())
}
