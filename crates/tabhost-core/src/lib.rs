//! # tabhost-core
//!
//! Core domain models and resolution policy for TabHost.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the candidate model, the deterministic host-selection policy, the chooser state
//! machine, and the port contracts implemented by the platform layer.

// Public module exports
pub mod candidate;
pub mod chooser;
pub mod ids;
pub mod policy;
pub mod ports;
pub mod registry;
pub mod resolution;

// Re-export commonly used types at the crate root
pub use candidate::{CandidateApp, IconHandle};
pub use chooser::{ChooserAction, ChooserEvent, ChooserState, ChooserStateMachine};
pub use ids::{ListenerId, PackageId};
pub use policy::HostDecision;
pub use registry::{HandlerFilter, ViewHandler};
pub use resolution::{CachedOutcome, Resolution};
