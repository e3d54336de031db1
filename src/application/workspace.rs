//! VentureWorkspace - the explicit home of all per-session state.
//!
//! Owns the business record (through the store) and the navigation
//! controller; workflows and views borrow it instead of reaching for any
//! ambient global. Applying a patch is the single write path, and it is
//! also where the guarded auto-advance hook runs.

use std::sync::Mutex;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::ModuleType;
use crate::domain::navigation::{ModuleStatus, NavigationController};
use crate::domain::venture::{BusinessPatch, BusinessRecord};

use super::store::BusinessStore;

/// Per-session workspace: one record, one navigation state.
#[derive(Debug, Default)]
pub struct VentureWorkspace {
    store: BusinessStore,
    navigation: Mutex<NavigationController>,
}

impl VentureWorkspace {
    /// Creates a fresh workspace on the idea analyzer.
    pub fn new() -> Self {
        Self {
            store: BusinessStore::new(),
            navigation: Mutex::new(NavigationController::new()),
        }
    }

    /// Returns a snapshot of the business record.
    pub fn record(&self) -> BusinessRecord {
        self.store.snapshot()
    }

    /// Runs a closure against the current record without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&BusinessRecord) -> R) -> R {
        self.store.read(f)
    }

    /// Merges a patch into the record and applies the guarded auto-advance:
    /// a patch that sets a non-empty name while the idea analyzer is active
    /// moves the session to the dashboard.
    pub fn apply(&self, patch: BusinessPatch) {
        // Navigation lock held across the merge so readers of the active
        // module never observe the transition without the merged record.
        let mut navigation = self
            .navigation
            .lock()
            .expect("VentureWorkspace: navigation lock poisoned");
        navigation.auto_advance(&patch);
        self.store.merge(patch);
    }

    /// Activates a module if gating allows it. Rejections are silent
    /// no-ops, mirroring a disabled sidebar button.
    pub fn select_module(&self, module: ModuleType) -> bool {
        let record = self.store.snapshot();
        self.navigation
            .lock()
            .expect("VentureWorkspace: navigation lock poisoned")
            .select(module, &record)
    }

    /// Returns the active module.
    pub fn active_module(&self) -> ModuleType {
        self.navigation
            .lock()
            .expect("VentureWorkspace: navigation lock poisoned")
            .active()
    }

    /// Derived sidebar view, recomputed from the current record.
    pub fn module_view(&self) -> Vec<ModuleStatus> {
        let record = self.store.snapshot();
        self.navigation
            .lock()
            .expect("VentureWorkspace: navigation lock poisoned")
            .module_view(&record)
    }

    /// Derived dashboard read model.
    pub fn dashboard(&self) -> DashboardOverview {
        self.store.read(DashboardOverview::from_record)
    }
}
