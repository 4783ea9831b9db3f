//! # tabhost
//!
//! Picks, among installed applications capable of handling web navigation,
//! the one best suited to host an embedded browser tab session, and falls
//! back to a full browser view when no such host exists.
//!
//! The domain logic lives in [`tabhost_core`], the process-wide resolution
//! service in [`tabhost_app`], and ready-made adapters (in-memory registry,
//! channel chooser, logging fallback) in [`tabhost_infra`]. Embedders wire
//! the service against their own registry and UI ports:
//!
//! ```no_run
//! use std::sync::Arc;
//! use tabhost::{InMemoryPackageRegistry, InstalledApp, ChannelChooser, TabHostResolver};
//!
//! # async fn wire() {
//! let registry = Arc::new(
//!     InMemoryPackageRegistry::new()
//!         .with_app(InstalledApp::browser("com.browser.a", "Browser A")),
//! );
//! let (chooser, _presentations) = ChannelChooser::new();
//! let resolver = TabHostResolver::new(registry, Arc::new(chooser));
//! let outcome = resolver.resolve_package().await;
//! # let _ = outcome;
//! # }
//! ```

pub use tabhost_app::{ListenerSet, OpenTab, OpenTabError, TabHostResolver, TabLaunch};
pub use tabhost_core::{
    CandidateApp, CachedOutcome, ChooserAction, ChooserEvent, ChooserState, ChooserStateMachine,
    HandlerFilter, HostDecision, IconHandle, ListenerId, PackageId, Resolution, ViewHandler,
};
pub use tabhost_core::ports;
pub use tabhost_infra::{ChannelChooser, InMemoryPackageRegistry, InstalledApp, LoggingLinkFallback};
