//! Headless demo of the resolution flow.
//!
//! Wires the resolver against a scripted registry with two tab-capable
//! browsers and no default handler, so resolution goes through the full
//! disambiguation path: present, "tap" an entry, resolve again.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tabhost::ports::SelectionListener;
use tabhost::{
    ChannelChooser, InMemoryPackageRegistry, InstalledApp, LoggingLinkFallback, OpenTab,
    PackageId, Resolution, TabHostResolver,
};

struct PrintListener;

impl SelectionListener for PrintListener {
    fn on_selected(&self, package: Option<&PackageId>) {
        match package {
            Some(pkg) => info!(%pkg, "user picked a tab host"),
            None => info!("user dismissed the chooser"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let registry = Arc::new(
        InMemoryPackageRegistry::new()
            .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
            .with_app(InstalledApp::browser("com.browser.b", "Browser B"))
            .with_app(InstalledApp::specialized("com.site.app", "Site App")),
    );
    let (chooser, mut presentations) = ChannelChooser::new();
    let resolver = Arc::new(TabHostResolver::new(registry, Arc::new(chooser)));
    resolver.add_listener(Arc::new(PrintListener));

    match resolver.resolve_package().await {
        Resolution::Resolved(pkg) => info!(%pkg, "resolved without asking"),
        Resolution::Unavailable => info!("no tab host installed"),
        Resolution::Pending => {
            let entries = presentations.recv().await.expect("chooser presentation");
            for (i, entry) in entries.iter().enumerate() {
                info!(index = i, package = %entry.package, label = %entry.label, "chooser entry");
            }
            // Simulate the user tapping the second entry.
            resolver.chooser_item_selected(1);
        }
    }

    let use_case = OpenTab::new(Arc::clone(&resolver), Arc::new(LoggingLinkFallback::new()));
    match use_case.open("https://example.com/docs").await? {
        tabhost::TabLaunch::TabHost { package, url } => {
            info!(%package, %url, "caller would now build the tab-host navigation request")
        }
        tabhost::TabLaunch::FellBack { url } => info!(%url, "opened via fallback"),
        tabhost::TabLaunch::AwaitingChoice { url } => info!(%url, "still waiting on the user"),
    }

    Ok(())
}
