//! Identifier wrapper types.

mod listener_id;
mod package_id;

pub use listener_id::ListenerId;
pub use package_id::PackageId;
