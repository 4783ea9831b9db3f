//! Channel-backed chooser adapter.
//!
//! Forwards each presented candidate list over an mpsc channel to whatever
//! actually renders the choice (a test, a headless driver, a UI shim). The
//! verdict travels back by calling the resolver's chooser entry points, the
//! same way a real UI host would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use tabhost_core::candidate::CandidateApp;
use tabhost_core::ports::{ChooserPort, ChooserSurface};

struct ChannelSurface {
    dismissed: Arc<AtomicBool>,
}

impl ChooserSurface for ChannelSurface {
    fn dismiss(&mut self) {
        debug!("chooser surface force-dismissed");
        self.dismissed.store(true, Ordering::SeqCst);
    }
}

/// [`ChooserPort`] that publishes candidate lists on a channel.
pub struct ChannelChooser {
    tx: mpsc::UnboundedSender<Vec<CandidateApp>>,
    last_surface: Mutex<Option<Arc<AtomicBool>>>,
}

impl ChannelChooser {
    /// Build the adapter plus the receiving end of the presentation stream.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Vec<CandidateApp>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                last_surface: Mutex::new(None),
            },
            rx,
        )
    }

    /// Whether the most recently presented surface was force-dismissed.
    pub fn last_surface_dismissed(&self) -> bool {
        self.last_surface
            .lock()
            .unwrap()
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ChooserPort for ChannelChooser {
    async fn present(&self, candidates: &[CandidateApp]) -> Result<Box<dyn ChooserSurface>> {
        let dismissed = Arc::new(AtomicBool::new(false));
        *self.last_surface.lock().unwrap() = Some(Arc::clone(&dismissed));
        self.tx
            .send(candidates.to_vec())
            .map_err(|_| anyhow::anyhow!("chooser consumer is gone"))?;
        Ok(Box::new(ChannelSurface { dismissed }))
    }
}
