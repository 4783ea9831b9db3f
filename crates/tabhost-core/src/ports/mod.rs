//! Port interfaces for the application layer
//!
//! Ports define the contract between the resolution logic and the host
//! environment. This follows Hexagonal Architecture principles: the package
//! registry, the chooser surface, and the "open in a full browser" fallback
//! are all external collaborators reached through these traits.

mod chooser;
mod link_fallback;
mod package_registry;
mod selection_listener;


pub use chooser::{ChooserPort, ChooserSurface};
pub use link_fallback::LinkFallbackPort;
pub use package_registry::PackageRegistryPort;
pub use selection_listener::SelectionListener;
