pub mod slot;
pub mod window;

pub use slot::JsonSlot;
pub use window::WindowGeometry;

use crate::plan::{PlanEntry, PlanList};
use crate::utils::paths::{get_plans_path, get_window_size_path};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// The two persistence slots: the plan list and the window geometry.
/// They share nothing but a directory.
#[derive(Debug, Clone)]
pub struct Storage {
    plans: JsonSlot<Vec<PlanEntry>>,
    window: JsonSlot<WindowGeometry>,
}

impl Storage {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            plans: JsonSlot::new(get_plans_path(data_dir)),
            window: JsonSlot::new(get_window_size_path(data_dir)),
        }
    }

    pub fn plans_path(&self) -> &Path {
        self.plans.path()
    }

    pub fn window_size_path(&self) -> &Path {
        self.window.path()
    }

    /// Loads the plan list; no file yet means an empty list.
    pub fn load_plans(&self) -> Result<PlanList> {
        let entries = self.plans.load()?.unwrap_or_default();
        debug!(count = entries.len(), path = %self.plans.path().display(), "Loaded plans");
        Ok(PlanList::with_entries(entries))
    }

    pub fn save_plans(&self, list: &PlanList) -> Result<()> {
        self.plans.save(&list.entries().to_vec())?;
        debug!(count = list.len(), "Saved plans");
        Ok(())
    }

    pub fn load_window_geometry(&self) -> Result<Option<WindowGeometry>> {
        self.window.load()
    }

    pub fn save_window_geometry(&self, geometry: WindowGeometry) -> Result<()> {
        self.window.save(&geometry)
    }
}
