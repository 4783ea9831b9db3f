use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// Fallback contract for when no tab-hosting application exists.
///
/// The collaborator behind this port opens the link in a full browser view;
/// the resolution subsystem never navigates itself.
#[async_trait]
pub trait LinkFallbackPort: Send + Sync {
    async fn open_link(&self, url: &Url) -> Result<()>;
}
