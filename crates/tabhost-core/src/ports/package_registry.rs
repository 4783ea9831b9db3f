//! Package registry port - abstracts the host environment's package facts.
//!
//! All queries are read-only and potentially I/O-backed (the host may have
//! to consult its installed-application database), hence async. Empty
//! result sets are normal, not errors.

use anyhow::Result;
use async_trait::async_trait;

use crate::ids::PackageId;
use crate::registry::{HandlerFilter, ViewHandler};

/// Package registry port - abstracts the host environment's package facts.
#[async_trait]
pub trait PackageRegistryPort: Send + Sync {
    /// All applications registered to handle the generic web-view action.
    async fn view_handlers(&self) -> Vec<ViewHandler>;

    /// The registry's own default handler for that action, if any.
    async fn default_view_handler(&self) -> Option<PackageId>;

    /// Whether `package` additionally exposes a tab-hosting background
    /// service.
    async fn has_tab_service(&self, package: &PackageId) -> bool;

    /// Declared match metadata for every handler of the generic web-view
    /// action.
    ///
    /// The only fallible probe: filter metadata can be malformed or
    /// inaccessible. Callers must degrade to "not specialized" on error,
    /// never abort resolution.
    async fn view_handler_filters(&self) -> Result<Vec<HandlerFilter>>;
}
