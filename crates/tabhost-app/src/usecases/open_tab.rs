//! Open-tab use case.
//!
//! Glue between resolution and navigation: resolve a tab host, hand its
//! package back to the caller for the actual navigation request, or route
//! the link to the full-browser fallback when no host exists. The
//! subsystem never builds the navigation request itself.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use tabhost_core::ids::PackageId;
use tabhost_core::ports::LinkFallbackPort;
use tabhost_core::resolution::Resolution;

use crate::resolver::TabHostResolver;

#[derive(Debug, Error)]
pub enum OpenTabError {
    /// The input is not a syntactically valid http(s) URL.
    #[error("not a valid web url: {0}")]
    InvalidUrl(String),

    /// The fallback collaborator failed to open the link.
    #[error("fallback failed to open link")]
    Fallback(#[source] anyhow::Error),
}

/// How a link ended up being dispatched.
#[derive(Debug)]
pub enum TabLaunch {
    /// A tab host is available; the caller builds the navigation request
    /// against this package.
    TabHost { package: PackageId, url: Url },
    /// No tab host exists; the link went to the full-browser fallback.
    FellBack { url: Url },
    /// Resolution is waiting on a human choice; nothing was opened.
    AwaitingChoice { url: Url },
}

/// Resolve-then-dispatch use case.
pub struct OpenTab {
    resolver: Arc<TabHostResolver>,
    fallback: Arc<dyn LinkFallbackPort>,
}

impl OpenTab {
    pub fn new(resolver: Arc<TabHostResolver>, fallback: Arc<dyn LinkFallbackPort>) -> Self {
        Self { resolver, fallback }
    }

    pub async fn open(&self, raw_url: &str) -> Result<TabLaunch, OpenTabError> {
        let url = parse_web_url(raw_url)?;

        match self.resolver.resolve_package().await {
            Resolution::Resolved(package) => {
                info!(%package, %url, "dispatching link to tab host");
                Ok(TabLaunch::TabHost { package, url })
            }
            Resolution::Unavailable => {
                debug!(%url, "no tab host installed, using fallback");
                self.fallback
                    .open_link(&url)
                    .await
                    .map_err(OpenTabError::Fallback)?;
                Ok(TabLaunch::FellBack { url })
            }
            Resolution::Pending => Ok(TabLaunch::AwaitingChoice { url }),
        }
    }
}

fn parse_web_url(raw: &str) -> Result<Url, OpenTabError> {
    let url = Url::parse(raw).map_err(|_| OpenTabError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(OpenTabError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tabhost_core::candidate::{CandidateApp, IconHandle};
    use tabhost_core::ports::{ChooserPort, ChooserSurface, PackageRegistryPort};
    use tabhost_core::registry::{HandlerFilter, ViewHandler};

    struct FixedRegistry {
        handlers: Vec<ViewHandler>,
    }

    #[async_trait]
    impl PackageRegistryPort for FixedRegistry {
        async fn view_handlers(&self) -> Vec<ViewHandler> {
            self.handlers.clone()
        }

        async fn default_view_handler(&self) -> Option<PackageId> {
            None
        }

        async fn has_tab_service(&self, _package: &PackageId) -> bool {
            true
        }

        async fn view_handler_filters(&self) -> anyhow::Result<Vec<HandlerFilter>> {
            Ok(vec![])
        }
    }

    struct NoopChooser;

    #[async_trait]
    impl ChooserPort for NoopChooser {
        async fn present(
            &self,
            _candidates: &[CandidateApp],
        ) -> anyhow::Result<Box<dyn ChooserSurface>> {
            struct S;
            impl ChooserSurface for S {
                fn dismiss(&mut self) {}
            }
            Ok(Box::new(S))
        }
    }

    #[derive(Default)]
    struct CountingFallback {
        calls: AtomicUsize,
        last: Mutex<Option<Url>>,
    }

    #[async_trait]
    impl LinkFallbackPort for CountingFallback {
        async fn open_link(&self, url: &Url) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(url.clone());
            Ok(())
        }
    }

    fn resolver_with(handlers: Vec<ViewHandler>) -> Arc<TabHostResolver> {
        Arc::new(TabHostResolver::new(
            Arc::new(FixedRegistry { handlers }),
            Arc::new(NoopChooser),
        ))
    }

    fn handler(pkg: &str) -> ViewHandler {
        ViewHandler::new(pkg, pkg, IconHandle::from("icon"))
    }

    #[tokio::test]
    async fn invalid_urls_are_rejected_before_resolution() {
        let use_case = OpenTab::new(resolver_with(vec![]), Arc::new(CountingFallback::default()));
        for raw in ["not a url", "ftp://example.com/file", "javascript:alert(1)"] {
            assert!(matches!(
                use_case.open(raw).await,
                Err(OpenTabError::InvalidUrl(_))
            ));
        }
    }

    #[tokio::test]
    async fn resolved_host_is_handed_back_without_touching_fallback() {
        let fallback = Arc::new(CountingFallback::default());
        let use_case = OpenTab::new(
            resolver_with(vec![handler("com.browser.a")]),
            Arc::clone(&fallback) as Arc<dyn LinkFallbackPort>,
        );

        let launch = use_case.open("https://example.com/page").await.unwrap();
        match launch {
            TabLaunch::TabHost { package, url } => {
                assert_eq!(package, PackageId::from("com.browser.a"));
                assert_eq!(url.as_str(), "https://example.com/page");
            }
            other => panic!("expected TabHost, got {other:?}"),
        }
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unavailable_host_routes_to_fallback() {
        let fallback = Arc::new(CountingFallback::default());
        let use_case = OpenTab::new(
            resolver_with(vec![]),
            Arc::clone(&fallback) as Arc<dyn LinkFallbackPort>,
        );

        let launch = use_case.open("http://example.com/").await.unwrap();
        assert!(matches!(launch, TabLaunch::FellBack { .. }));
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            fallback.last.lock().unwrap().as_ref().unwrap().as_str(),
            "http://example.com/"
        );
    }

    #[tokio::test]
    async fn ambiguous_resolution_awaits_the_choice() {
        let fallback = Arc::new(CountingFallback::default());
        let use_case = OpenTab::new(
            resolver_with(vec![handler("com.browser.a"), handler("com.browser.b")]),
            Arc::clone(&fallback) as Arc<dyn LinkFallbackPort>,
        );

        let launch = use_case.open("https://example.com/").await.unwrap();
        assert!(matches!(launch, TabLaunch::AwaitingChoice { .. }));
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }
}
