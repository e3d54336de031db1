//! Navigation controller - which module is active, and which are reachable.
//!
//! Pure state machine over the seven [`ModuleType`] values. Enablement is a
//! function of the record alone and is recomputed on every read; the only
//! stored state is the active module.
//!
//! # Transitions
//!
//! - User selection: allowed iff the target is the idea analyzer or the
//!   record has an analyzed idea. Disallowed selections are silent no-ops,
//!   rejected here even if a caller bypasses a disabled affordance.
//! - Auto-advance: a merge whose patch sets a non-empty name while the
//!   analyzer is active moves to the dashboard. Guarded explicitly; any
//!   later name merge while elsewhere never moves the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ModuleType;
use crate::domain::venture::{BusinessPatch, BusinessRecord};

use super::progress::module_completion;

/// Derived per-module view for a sidebar or progress display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatus {
    pub module: ModuleType,
    pub enabled: bool,
    pub active: bool,
    /// Artifact completion; `None` for the dashboard.
    pub complete: Option<bool>,
}

/// Tracks the active module and enforces gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    active: ModuleType,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// Creates a controller with the idea analyzer active.
    pub fn new() -> Self {
        Self {
            active: ModuleType::IdeaAnalyzer,
        }
    }

    /// Returns the active module.
    pub fn active(&self) -> ModuleType {
        self.active
    }

    /// Returns true if the module can be activated given the record.
    pub fn is_enabled(module: ModuleType, record: &BusinessRecord) -> bool {
        module.is_always_enabled() || record.is_analyzed()
    }

    /// Activates a module if gating allows it.
    ///
    /// Returns true if the selection was accepted. A rejected selection
    /// leaves the active module unchanged and is not an error.
    pub fn select(&mut self, module: ModuleType, record: &BusinessRecord) -> bool {
        if !Self::is_enabled(module, record) {
            return false;
        }
        self.active = module;
        true
    }

    /// Applies the one automatic transition after a merge.
    ///
    /// Fires when the merged patch set a non-empty name while the idea
    /// analyzer was active; the precondition no longer holds afterwards, so
    /// ordinary sessions see this at most once. Returns true if it fired.
    pub fn auto_advance(&mut self, patch: &BusinessPatch) -> bool {
        if patch.sets_name() && self.active == ModuleType::IdeaAnalyzer {
            self.active = ModuleType::Dashboard;
            return true;
        }
        false
    }

    /// Derived view over all modules, recomputed from the record.
    pub fn module_view(&self, record: &BusinessRecord) -> Vec<ModuleStatus> {
        ModuleType::all()
            .iter()
            .map(|&module| ModuleStatus {
                module,
                enabled: Self::is_enabled(module, record),
                active: self.active == module,
                complete: module_completion(module, record),
            })
            .collect()
    }
}
