use crate::ids::PackageId;

/// Callback contract for resolution outcomes.
///
/// Notified synchronously, in registration order, after the cache write.
/// `None` means the user dismissed the chooser without choosing. There is
/// no replay: a listener registered after an outcome fired never sees it.
pub trait SelectionListener: Send + Sync {
    fn on_selected(&self, package: Option<&PackageId>);
}
