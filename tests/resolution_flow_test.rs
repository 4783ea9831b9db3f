//! End-to-end resolution flows wired through the infra adapters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tabhost::ports::SelectionListener;
use tabhost::{
    ChannelChooser, InMemoryPackageRegistry, InstalledApp, LoggingLinkFallback, OpenTab,
    PackageId, Resolution, TabHostResolver, TabLaunch,
};

struct Recorder {
    seen: Mutex<Vec<Option<String>>>,
    calls: AtomicUsize,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }
}

impl SelectionListener for Recorder {
    fn on_selected(&self, package: Option<&PackageId>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push(package.map(|p| p.to_string()));
    }
}

fn wire(registry: InMemoryPackageRegistry) -> (Arc<TabHostResolver>, Arc<ChannelChooser>, tokio::sync::mpsc::UnboundedReceiver<Vec<tabhost::CandidateApp>>) {
    let (chooser, presentations) = ChannelChooser::new();
    let chooser = Arc::new(chooser);
    let resolver = Arc::new(TabHostResolver::new(Arc::new(registry), Arc::clone(&chooser) as _));
    (resolver, chooser, presentations)
}

#[tokio::test]
async fn unavailable_is_sticky_even_after_a_browser_appears() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::specialized("com.site.app", "Site App"));
    let registry = Arc::new(registry);
    let (chooser, _presentations) = ChannelChooser::new();
    let resolver = TabHostResolver::new(Arc::clone(&registry) as _, Arc::new(chooser));

    assert_eq!(resolver.resolve_package().await, Resolution::Unavailable);

    // Installing a capable browser later in the same process changes
    // nothing: the one-shot cache already remembered "unavailable".
    registry.install(InstalledApp::browser("com.browser.a", "Browser A"));
    assert_eq!(resolver.resolve_package().await, Resolution::Unavailable);
}

#[tokio::test]
async fn default_browser_short_circuits_the_chooser() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
        .with_app(InstalledApp::browser("com.browser.b", "Browser B"))
        .with_default_handler("com.browser.a");
    let (resolver, _chooser, mut presentations) = wire(registry);

    assert_eq!(
        resolver.resolve_package().await,
        Resolution::Resolved(PackageId::from("com.browser.a"))
    );
    assert!(presentations.try_recv().is_err());
}

#[tokio::test]
async fn specialized_handler_disqualifies_the_default_and_asks_the_user() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
        .with_app(InstalledApp::browser("com.browser.b", "Browser B"))
        .with_app(InstalledApp::specialized("com.site.app", "Site App"))
        .with_default_handler("com.browser.a");
    let (resolver, _chooser, mut presentations) = wire(registry);

    assert_eq!(resolver.resolve_package().await, Resolution::Pending);

    // The chooser lists only the tab-capable browsers, label + icon each.
    let entries = presentations.recv().await.unwrap();
    let packages: Vec<_> = entries.iter().map(|c| c.package.as_str().to_string()).collect();
    assert_eq!(packages, vec!["com.browser.a", "com.browser.b"]);
    assert!(entries.iter().all(|c| !c.label.is_empty()));
}

#[tokio::test]
async fn user_choice_resolves_for_the_rest_of_the_process() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
        .with_app(InstalledApp::browser("com.browser.b", "Browser B"));
    let (resolver, _chooser, mut presentations) = wire(registry);

    let first = Recorder::new();
    let second = Recorder::new();
    resolver.add_listener(first.clone());
    resolver.add_listener(second.clone());

    assert_eq!(resolver.resolve_package().await, Resolution::Pending);
    let entries = presentations.recv().await.unwrap();
    let picked = entries
        .iter()
        .position(|c| c.package.as_str() == "com.browser.b")
        .unwrap();
    resolver.chooser_item_selected(picked);

    assert_eq!(
        resolver.resolve_package().await,
        Resolution::Resolved(PackageId::from("com.browser.b"))
    );
    assert_eq!(
        *first.seen.lock().unwrap(),
        vec![Some("com.browser.b".to_string())]
    );
    assert_eq!(first.calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelling_the_chooser_keeps_resolution_repeatable() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
        .with_app(InstalledApp::browser("com.browser.b", "Browser B"));
    let (resolver, _chooser, mut presentations) = wire(registry);

    let listener = Recorder::new();
    resolver.add_listener(listener.clone());

    assert_eq!(resolver.resolve_package().await, Resolution::Pending);
    presentations.recv().await.unwrap();
    resolver.chooser_cancelled();
    assert_eq!(*listener.seen.lock().unwrap(), vec![None]);

    // Cache stayed empty: the whole algorithm runs again.
    assert_eq!(resolver.resolve_package().await, Resolution::Pending);
    presentations.recv().await.unwrap();
    assert_eq!(listener.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn destroying_the_screen_cancels_the_surface_silently() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"))
        .with_app(InstalledApp::browser("com.browser.b", "Browser B"));
    let (resolver, chooser, mut presentations) = wire(registry);

    let listener = Recorder::new();
    resolver.add_listener(listener.clone());

    assert_eq!(resolver.resolve_package().await, Resolution::Pending);
    presentations.recv().await.unwrap();

    resolver.screen_destroyed();
    assert!(chooser.last_surface_dismissed());
    assert_eq!(listener.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn open_tab_falls_back_when_nothing_hosts_tabs() {
    let registry = InMemoryPackageRegistry::new();
    let (resolver, _chooser, _presentations) = wire(registry);
    let use_case = OpenTab::new(resolver, Arc::new(LoggingLinkFallback::new()));

    let launch = use_case.open("https://example.com/docs").await.unwrap();
    assert!(matches!(launch, TabLaunch::FellBack { .. }));
}

#[tokio::test]
async fn open_tab_hands_the_package_to_the_caller() {
    let registry = InMemoryPackageRegistry::new()
        .with_app(InstalledApp::browser("com.browser.a", "Browser A"));
    let (resolver, _chooser, _presentations) = wire(registry);
    let use_case = OpenTab::new(resolver, Arc::new(LoggingLinkFallback::new()));

    match use_case.open("https://example.com/").await.unwrap() {
        TabLaunch::TabHost { package, .. } => {
            assert_eq!(package, PackageId::from("com.browser.a"));
        }
        other => panic!("expected TabHost, got {other:?}"),
    }
}
