//! Tab-host resolution service
//!
//! One instance per process, passed by reference to all call sites. Owns
//! the one-shot resolution cache, the listener set, and the pending chooser
//! session, and drives the pure chooser state machine from `tabhost-core`.
//!
//! # Architecture / 架构
//!
//! ```text
//! resolve_package (cache / registry probes / policy)
//!   ↓ NeedsChoice
//! ChooserPort::present  →  Pending returned to the caller
//!   ↓ UI callbacks (chooser_item_selected / chooser_cancelled / screen_destroyed)
//! ChooserStateMachine (pure state transitions)
//!   ↓ ChooserActions
//! cache write → surface dismissal → listener fan-out
//! ```
//!
//! Not designed for concurrent invocation: the state lock is never held
//! across a registry await, so two first-time resolves racing each other
//! may double-present a chooser. Accepted limitation of the single
//! logical-thread-of-control model.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use tabhost_core::candidate::CandidateApp;
use tabhost_core::chooser::{ChooserAction, ChooserEvent, ChooserState, ChooserStateMachine};
use tabhost_core::ids::{ListenerId, PackageId};
use tabhost_core::policy::{decide, has_specialized_handler, HostDecision};
use tabhost_core::ports::{ChooserPort, ChooserSurface, PackageRegistryPort, SelectionListener};
use tabhost_core::resolution::{CachedOutcome, Resolution};

use crate::listeners::ListenerSet;

/// Bookkeeping for a chooser that is on screen awaiting a verdict.
///
/// Sole owner of the surface handle; dropped when a choice is made, the
/// user cancels, or the hosting screen is destroyed.
struct PendingChoice {
    chooser: ChooserState,
    surface: Option<Box<dyn ChooserSurface>>,
}

struct ResolverState {
    cache: Option<CachedOutcome>,
    listeners: ListenerSet,
    pending: Option<PendingChoice>,
}

/// Process-wide tab-host resolution service.
pub struct TabHostResolver {
    registry: Arc<dyn PackageRegistryPort>,
    chooser: Arc<dyn ChooserPort>,
    state: Mutex<ResolverState>,
}

impl TabHostResolver {
    pub fn new(registry: Arc<dyn PackageRegistryPort>, chooser: Arc<dyn ChooserPort>) -> Self {
        Self {
            registry,
            chooser,
            state: Mutex::new(ResolverState {
                cache: None,
                listeners: ListenerSet::new(),
                pending: None,
            }),
        }
    }

    /// Pick the installed package to host an embedded tab session.
    ///
    /// Returns immediately from the cache once any outcome (including
    /// `Unavailable`) has been recorded. Otherwise probes the registry,
    /// applies the decision policy, and either resolves synchronously or
    /// presents a chooser and returns [`Resolution::Pending`]; the real
    /// completion then arrives through listener notification.
    pub async fn resolve_package(&self) -> Resolution {
        if let Some(cached) = self.state.lock().unwrap().cache.as_ref() {
            return cached.to_resolution();
        }

        let handlers = self.registry.view_handlers().await;
        let default_handler = self.registry.default_view_handler().await;

        let mut candidates = Vec::new();
        for handler in handlers {
            if !handler.package.is_valid() {
                warn!(package = %handler.package, "skipping handler with malformed package id");
                continue;
            }
            if self.registry.has_tab_service(&handler.package).await {
                candidates.push(CandidateApp::new(
                    handler.package,
                    handler.label,
                    handler.icon,
                ));
            }
        }

        // The filter probe is only worth its cost when the default-handler
        // shortcut could actually fire.
        let default_is_specialized = if candidates.len() > 1 && default_handler.is_some() {
            self.default_handler_is_specialized().await
        } else {
            false
        };

        match decide(&candidates, default_handler.as_ref(), default_is_specialized) {
            HostDecision::Unavailable => {
                self.state.lock().unwrap().cache = Some(CachedOutcome::Unavailable);
                Resolution::Unavailable
            }
            HostDecision::Single(package) | HostDecision::PreferDefault(package) => {
                self.state.lock().unwrap().cache =
                    Some(CachedOutcome::Package(package.clone()));
                Resolution::Resolved(package)
            }
            HostDecision::NeedsChoice => self.present_chooser(candidates).await,
        }
    }

    /// Register a listener for resolution outcomes. No uniqueness is
    /// enforced; no replay of outcomes that already fired.
    pub fn add_listener(&self, listener: Arc<dyn SelectionListener>) -> ListenerId {
        self.state.lock().unwrap().listeners.add(listener)
    }

    /// Unregister a listener; absent ids are a no-op.
    pub fn remove_listener(&self, id: &ListenerId) {
        self.state.lock().unwrap().listeners.remove(id);
    }

    /// UI callback: the user tapped the candidate at `index`.
    pub fn chooser_item_selected(&self, index: usize) {
        self.handle_chooser_event(ChooserEvent::ItemChosen { index });
    }

    /// UI callback: the user dismissed the chooser without choosing.
    /// Leaves the cache empty so a later resolve repeats the algorithm.
    pub fn chooser_cancelled(&self) {
        self.handle_chooser_event(ChooserEvent::Cancelled);
    }

    /// Lifecycle callback: the screen hosting the chooser was destroyed
    /// while the choice was still pending. Force-dismisses the surface;
    /// does not notify listeners (screen destruction is not a verdict).
    pub fn screen_destroyed(&self) {
        self.handle_chooser_event(ChooserEvent::ScreenDestroyed);
    }

    async fn default_handler_is_specialized(&self) -> bool {
        match self.registry.view_handler_filters().await {
            Ok(filters) => has_specialized_handler(&filters),
            Err(err) => {
                // Malformed or inaccessible filter metadata must never sink
                // resolution; worst case the default-handler shortcut is
                // skipped and the chooser is shown.
                warn!(error = %err, "failed to probe handler filters, treating as not specialized");
                false
            }
        }
    }

    async fn present_chooser(&self, candidates: Vec<CandidateApp>) -> Resolution {
        match self.chooser.present(&candidates).await {
            Ok(surface) => {
                let mut st = self.state.lock().unwrap();
                if st.pending.is_some() {
                    warn!("replacing an already-pending chooser session");
                }
                st.pending = Some(PendingChoice {
                    chooser: ChooserState::Presented { candidates },
                    surface: Some(surface),
                });
                Resolution::Pending
            }
            Err(err) => {
                // No session is recorded and the cache stays empty, so a
                // later resolve retries the full algorithm.
                warn!(error = %err, "failed to present chooser");
                Resolution::Pending
            }
        }
    }

    fn handle_chooser_event(&self, event: ChooserEvent) {
        let mut outcome: Option<Option<PackageId>> = None;
        let mut to_notify = Vec::new();
        {
            let mut st = self.state.lock().unwrap();
            let Some(mut pending) = st.pending.take() else {
                debug!(?event, "chooser event without a pending session");
                return;
            };

            let (next, actions) = ChooserStateMachine::transition(pending.chooser, event);
            for action in actions {
                match action {
                    ChooserAction::CacheSelection { package } => {
                        st.cache = Some(CachedOutcome::Package(package));
                    }
                    // The pending session itself is the observer; it was
                    // already taken out of the state above.
                    ChooserAction::DetachObserver => {}
                    ChooserAction::DismissSurface => {
                        if let Some(mut surface) = pending.surface.take() {
                            surface.dismiss();
                        }
                    }
                    ChooserAction::NotifySelection { package } => {
                        outcome = Some(package);
                    }
                }
            }

            match next {
                ChooserState::Presented { candidates } => {
                    pending.chooser = ChooserState::Presented { candidates };
                    st.pending = Some(pending);
                }
                ChooserState::Closed => {}
            }

            if outcome.is_some() {
                to_notify = st.listeners.snapshot();
            }
        }

        // Fan-out happens outside the state lock so a listener may
        // add/remove listeners (or call back into the resolver) freely.
        if let Some(package) = outcome {
            for listener in to_notify {
                listener.on_selected(package.as_ref());
            }
        }
    }
}
