//! Tab-host resolution service.

mod service;

pub use service::TabHostResolver;
