//! # tabhost-app
//!
//! Orchestration layer for TabHost: the process-wide resolution service
//! that owns the one-shot cache, the listener set, and any pending chooser
//! session, plus the open-tab use case that glues resolution to the
//! full-browser fallback.

pub mod listeners;
pub mod resolver;
pub mod usecases;

pub use listeners::ListenerSet;
pub use resolver::TabHostResolver;
pub use usecases::open_tab::{OpenTab, OpenTabError, TabLaunch};
