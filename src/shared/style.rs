//! Style-intent lookup for the shell.
//!
//! The stylesheet owns what "active" looks like; this module only decides
//! which class names to emit. Conditional fragments go through
//! `merge_classes` instead of ad hoc string concatenation.

/// Visual state of a navigation link. Exactly one variant applies per
/// entry on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLinkState {
    Active,
    Inactive,
}

impl NavLinkState {
    pub fn from_active(active: bool) -> Self {
        if active {
            NavLinkState::Active
        } else {
            NavLinkState::Inactive
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavLinkState::Active => "c-sidebar__nav-item--active",
            NavLinkState::Inactive => "c-sidebar__nav-item--inactive",
        }
    }
}

/// Join class fragments into a single attribute value, skipping empties
/// and dropping repeated names (first occurrence wins).
pub fn merge_classes(fragments: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        for class in fragment.split_whitespace() {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_active_flag() {
        assert_eq!(NavLinkState::from_active(true), NavLinkState::Active);
        assert_eq!(NavLinkState::from_active(false), NavLinkState::Inactive);
    }

    #[test]
    fn test_state_classes_are_distinct() {
        assert_ne!(
            NavLinkState::Active.class(),
            NavLinkState::Inactive.class()
        );
    }

    #[test]
    fn test_merge_joins_fragments() {
        let merged = merge_classes(&["c-sidebar__nav-item", "c-sidebar__nav-item--active"]);
        assert_eq!(merged, "c-sidebar__nav-item c-sidebar__nav-item--active");
    }

    #[test]
    fn test_merge_skips_empty_fragments() {
        assert_eq!(merge_classes(&["a", "", "b"]), "a b");
    }

    #[test]
    fn test_merge_deduplicates() {
        assert_eq!(merge_classes(&["a b", "b c", "a"]), "a b c");
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert_eq!(merge_classes(&[]), "");
    }
}
