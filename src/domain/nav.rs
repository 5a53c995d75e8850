//! Navigation model for the dashboard shell.
//!
//! The shell renders a fixed, ordered list of navigation entries and
//! highlights whichever one matches the current route. The list is built
//! once at construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Closed set of glyphs the shell knows how to render.
///
/// Icons are referenced by variant here and turned into markup by the
/// `NavGlyph` component; the navigation model never touches rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Leaf,
    Dashboard,
    List,
    Settings,
}

/// One sidebar entry: a label and icon mapped to a target route path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub icon: NavIcon,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
        }
    }

    /// Entries need a visible label and a path usable both as a router
    /// target and as the highlight-matching key.
    fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.label.trim().is_empty() {
            return Err("empty label");
        }
        if self.path.is_empty() {
            return Err("empty path");
        }
        Ok(())
    }
}

/// Ordered, immutable set of navigation entries.
///
/// Paths are unique within the set: each path doubles as the list key and
/// the route-matching key, so a duplicate would make highlighting ambiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct NavModel {
    entries: Vec<NavEntry>,
}

impl NavModel {
    /// Build a model, rejecting the whole configuration on the first
    /// malformed or duplicate entry.
    pub fn strict(entries: Vec<NavEntry>) -> Result<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if let Err(reason) = entry.validate() {
                return Err(AppError::InvalidNavEntry(format!(
                    "{} ({:?})",
                    reason, entry.label
                )));
            }
            if seen.contains(&entry.path.as_str()) {
                return Err(AppError::DuplicateNavPath(entry.path.clone()));
            }
            seen.push(&entry.path);
        }
        Ok(Self { entries })
    }

    /// Build a model, dropping malformed and duplicate entries with a
    /// warning. The shell uses this path: a bad entry must never take the
    /// whole frame down.
    pub fn lenient(entries: Vec<NavEntry>) -> Self {
        let mut kept: Vec<NavEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Err(reason) = entry.validate() {
                logging::log_nav_entry_dropped(&entry.label, &entry.path, reason);
                continue;
            }
            if kept.iter().any(|e| e.path == entry.path) {
                logging::log_nav_entry_dropped(&entry.label, &entry.path, "duplicate path");
                continue;
            }
            kept.push(entry);
        }
        logging::log_nav_ready(kept.len());
        Self { entries: kept }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decide whether an entry is the active one for highlighting.
///
/// Policy is exact string equality, not prefix containment: `/` is active
/// only on `/` itself, and a detail route like `/jobs/42` highlights
/// nothing. A missing current path (router not ready) marks every entry
/// inactive rather than erroring.
pub fn is_active(entry_path: &str, current_path: Option<&str>) -> bool {
    match current_path {
        Some(current) => entry_path == current,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("Dashboard", "/", NavIcon::Dashboard),
            NavEntry::new("Workloads", "/jobs", NavIcon::List),
            NavEntry::new("Settings", "/settings", NavIcon::Settings),
        ]
    }

    fn active_labels(model: &NavModel, current: Option<&str>) -> Vec<String> {
        model
            .entries()
            .iter()
            .filter(|e| is_active(&e.path, current))
            .map(|e| e.label.clone())
            .collect()
    }

    #[test]
    fn test_entries_keep_declared_order() {
        let model = NavModel::strict(demo_entries()).unwrap();
        let paths: Vec<&str> = model.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/jobs", "/settings"]);
    }

    #[test]
    fn test_exact_match_selects_single_entry() {
        let model = NavModel::strict(demo_entries()).unwrap();
        assert_eq!(active_labels(&model, Some("/jobs")), vec!["Workloads"]);
    }

    #[test]
    fn test_root_entry_never_matches_by_prefix() {
        // "/" must not light up for sibling routes
        assert!(is_active("/", Some("/")));
        assert!(!is_active("/", Some("/jobs")));
        assert!(!is_active("/", Some("/settings")));
    }

    #[test]
    fn test_subpath_matches_no_entry() {
        let model = NavModel::strict(demo_entries()).unwrap();
        assert!(active_labels(&model, Some("/jobs/42")).is_empty());
    }

    #[test]
    fn test_missing_current_path_marks_all_inactive() {
        let model = NavModel::strict(demo_entries()).unwrap();
        assert!(active_labels(&model, None).is_empty());
    }

    #[test]
    fn test_active_state_is_exclusive() {
        let model = NavModel::strict(demo_entries()).unwrap();
        for current in ["/", "/jobs", "/settings"] {
            let active: Vec<bool> = model
                .entries()
                .iter()
                .map(|e| is_active(&e.path, Some(current)))
                .collect();
            assert_eq!(active.iter().filter(|a| **a).count(), 1);
        }
    }

    #[test]
    fn test_lenient_drops_malformed_entries() {
        let mut entries = demo_entries();
        entries.push(NavEntry::new("", "/empty-label", NavIcon::List));
        entries.push(NavEntry::new("No path", "", NavIcon::List));
        let model = NavModel::lenient(entries);
        assert_eq!(model.entries().len(), 3);
    }

    #[test]
    fn test_lenient_keeps_first_of_duplicate_paths() {
        let mut entries = demo_entries();
        entries.push(NavEntry::new("Jobs Again", "/jobs", NavIcon::Settings));
        let model = NavModel::lenient(entries);
        assert_eq!(model.entries().len(), 3);
        assert_eq!(model.entries()[1].label, "Workloads");
    }

    #[test]
    fn test_strict_rejects_duplicate_path() {
        let mut entries = demo_entries();
        entries.push(NavEntry::new("Jobs Again", "/jobs", NavIcon::Settings));
        let err = NavModel::strict(entries).unwrap_err();
        assert!(matches!(err, AppError::DuplicateNavPath(p) if p == "/jobs"));
    }

    #[test]
    fn test_strict_rejects_blank_label() {
        let entries = vec![NavEntry::new("   ", "/x", NavIcon::List)];
        assert!(NavModel::strict(entries).is_err());
    }

    #[test]
    fn test_lenient_tolerates_empty_list() {
        let model = NavModel::lenient(Vec::new());
        assert!(model.is_empty());
    }
}
