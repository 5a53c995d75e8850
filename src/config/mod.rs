//! Shell configuration.
//!
//! The navigation set is a configuration value injected at construction
//! time (via app context), not a process-wide global, so tests can swap in
//! alternative navigation sets. `NavConfig` mirrors the shape an external
//! source (a config file, a fetched document) would supply.

use serde::{Deserialize, Serialize};

use crate::domain::nav::{NavEntry, NavIcon, NavModel};
use crate::shared::errors::Result;

/// Product name shown in the sidebar branding block.
pub const BRAND_NAME: &str = "Green Scheduler";

/// Viewport width at which the navigation panel switches from a
/// horizontal top bar to a vertical left rail. Matches the stylesheet's
/// media query; keep the two in sync.
pub const LAYOUT_BREAKPOINT_PX: f64 = 768.0;

/// Navigation set as supplied by an external configuration source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    pub entries: Vec<NavEntry>,
}

impl NavConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate into a model, rejecting malformed configurations outright.
    pub fn into_model(self) -> Result<NavModel> {
        NavModel::strict(self.entries)
    }
}

/// The built-in navigation set for the Green Scheduler dashboard.
pub fn default_nav() -> NavModel {
    NavModel::lenient(vec![
        NavEntry::new("Dashboard", "/", NavIcon::Dashboard),
        NavEntry::new("Workloads", "/jobs", NavIcon::List),
        NavEntry::new("Settings", "/settings", NavIcon::Settings),
    ])
}
