//! Logging link fallback.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use url::Url;

use tabhost_core::ports::LinkFallbackPort;

/// [`LinkFallbackPort`] that only records the hand-off.
///
/// The resolution subsystem decides *whether* a tab host exists; actually
/// navigating is the embedder's job. Headless embeddings and tests use
/// this adapter to observe that the fallback path fired.
#[derive(Debug, Default, Clone)]
pub struct LoggingLinkFallback;

impl LoggingLinkFallback {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LinkFallbackPort for LoggingLinkFallback {
    async fn open_link(&self, url: &Url) -> Result<()> {
        info!(%url, "opening link in full browser view");
        Ok(())
    }
}
