//! # tabhost-infra
//!
//! Infrastructure adapters for TabHost: a scripted in-memory package
//! registry, a channel-backed chooser surface, and a logging link fallback.
//! Embedders with a real UI toolkit and package registry supply their own
//! port implementations; these adapters serve tests, demos, and headless
//! embeddings.

pub mod chooser;
pub mod fallback;
pub mod registry;

pub use chooser::ChannelChooser;
pub use fallback::LoggingLinkFallback;
pub use registry::{InMemoryPackageRegistry, InstalledApp};
