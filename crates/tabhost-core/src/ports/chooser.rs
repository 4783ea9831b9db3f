//! Chooser port - abstracts the modal single-choice disambiguation surface.

use anyhow::Result;
use async_trait::async_trait;

use crate::candidate::CandidateApp;

/// A live, on-screen chooser.
///
/// The resolution service holds the sole handle for as long as the choice
/// is pending and must be able to force-dismiss it (cancel, not select)
/// when the hosting screen is destroyed. Outcomes do not travel through
/// this handle: the UI host reports them by calling back into the service.
pub trait ChooserSurface: Send {
    /// Forcibly take the chooser off screen without producing a verdict.
    fn dismiss(&mut self);
}

/// Chooser port - presents the candidate list to a human.
#[async_trait]
pub trait ChooserPort: Send + Sync {
    /// Put a modal single-choice chooser on screen with one entry per
    /// candidate (label + icon), waiting indefinitely for input.
    async fn present(&self, candidates: &[CandidateApp]) -> Result<Box<dyn ChooserSurface>>;
}
