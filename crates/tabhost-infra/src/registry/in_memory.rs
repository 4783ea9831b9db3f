//! In-memory package registry.
//!
//! A scripted stand-in for the host environment's package database. Apps
//! can be installed after construction, which is exactly how the one-shot
//! cache's "environment changed too late" behavior gets exercised.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use tabhost_core::candidate::IconHandle;
use tabhost_core::ids::PackageId;
use tabhost_core::ports::PackageRegistryPort;
use tabhost_core::registry::{HandlerFilter, ViewHandler};

/// One scripted installed application.
#[derive(Debug, Clone)]
pub struct InstalledApp {
    pub package: PackageId,
    pub label: String,
    pub icon: IconHandle,
    /// Whether the app exposes a tab-hosting background service.
    pub has_tab_service: bool,
    /// Declared data authorities on its web-view filter.
    pub data_authorities: u32,
    /// Declared data path patterns on its web-view filter.
    pub data_paths: u32,
}

impl InstalledApp {
    /// A plain browser: handles web views, hosts tabs, catch-all filter.
    pub fn browser(package: &str, label: &str) -> Self {
        Self {
            package: PackageId::from(package),
            label: label.to_string(),
            icon: IconHandle::from(package),
            has_tab_service: true,
            data_authorities: 0,
            data_paths: 0,
        }
    }

    /// A site-specific app: claims a narrow authority + path pattern.
    pub fn specialized(package: &str, label: &str) -> Self {
        Self {
            package: PackageId::from(package),
            label: label.to_string(),
            icon: IconHandle::from(package),
            has_tab_service: false,
            data_authorities: 1,
            data_paths: 1,
        }
    }

    pub fn without_tab_service(mut self) -> Self {
        self.has_tab_service = false;
        self
    }

    pub fn with_tab_service(mut self) -> Self {
        self.has_tab_service = true;
        self
    }
}

struct RegistryTable {
    apps: Vec<InstalledApp>,
    default_handler: Option<PackageId>,
    filters_poisoned: bool,
}

/// Scripted [`PackageRegistryPort`] implementation.
#[derive(Default)]
pub struct InMemoryPackageRegistry {
    table: Mutex<RegistryTable>,
}

impl Default for RegistryTable {
    fn default() -> Self {
        Self {
            apps: Vec::new(),
            default_handler: None,
            filters_poisoned: false,
        }
    }
}

impl InMemoryPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(self, app: InstalledApp) -> Self {
        self.table.lock().unwrap().apps.push(app);
        self
    }

    pub fn with_default_handler(self, package: &str) -> Self {
        self.table.lock().unwrap().default_handler = Some(PackageId::from(package));
        self
    }

    /// Make `view_handler_filters` fail, simulating malformed or
    /// inaccessible filter metadata.
    pub fn with_poisoned_filters(self) -> Self {
        self.table.lock().unwrap().filters_poisoned = true;
        self
    }

    /// Install an app after construction (the resolution cache must not
    /// notice).
    pub fn install(&self, app: InstalledApp) {
        self.table.lock().unwrap().apps.push(app);
    }
}

#[async_trait]
impl PackageRegistryPort for InMemoryPackageRegistry {
    async fn view_handlers(&self) -> Vec<ViewHandler> {
        self.table
            .lock()
            .unwrap()
            .apps
            .iter()
            .map(|app| ViewHandler::new(app.package.clone(), app.label.clone(), app.icon.clone()))
            .collect()
    }

    async fn default_view_handler(&self) -> Option<PackageId> {
        self.table.lock().unwrap().default_handler.clone()
    }

    async fn has_tab_service(&self, package: &PackageId) -> bool {
        self.table
            .lock()
            .unwrap()
            .apps
            .iter()
            .any(|app| &app.package == package && app.has_tab_service)
    }

    async fn view_handler_filters(&self) -> Result<Vec<HandlerFilter>> {
        let table = self.table.lock().unwrap();
        if table.filters_poisoned {
            anyhow::bail!("filter metadata unavailable");
        }
        Ok(table
            .apps
            .iter()
            .map(|app| {
                HandlerFilter::new(app.package.clone(), app.data_authorities, app.data_paths)
            })
            .collect())
    }
}
