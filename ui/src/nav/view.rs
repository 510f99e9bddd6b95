//! Pure resolution of a [`NavLink`] against the current path.
//!
//! `NavItem` renders exactly what [`NavEntry::resolve`] returns, so active
//! highlighting and menu contents can be checked without a running renderer.

use super::link::{NavLink, NavTarget};

pub const NAV_CLASS: &str = "main-nav";
pub const LINK_CLASS: &str = "main-nav__link";
pub const TRIGGER_CLASS: &str = "main-nav__trigger";
pub const ACTIVE_MODIFIER: &str = "main-nav__link--active";
pub const EXTERNAL_MODIFIER: &str = "main-nav__link--external";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry<'a> {
    Dropdown {
        label: &'a str,
        active: bool,
        items: &'a [NavLink],
    },
    /// `href` is `None` when the descriptor had none, so no `href` is rendered.
    External {
        label: &'a str,
        href: Option<&'a str>,
    },
    Internal {
        label: &'a str,
        href: &'a str,
        active: bool,
    },
}

impl<'a> NavEntry<'a> {
    pub fn resolve(link: &'a NavLink, current_path: &str) -> Self {
        let label = link.label.as_str();
        match &link.target {
            NavTarget::Dropdown(items) => NavEntry::Dropdown {
                label,
                active: link.is_active(current_path),
                items,
            },
            NavTarget::External(href) => NavEntry::External {
                label,
                href: Some(href.as_str()).filter(|h| !h.is_empty()),
            },
            NavTarget::Internal(href) => NavEntry::Internal {
                label,
                href: href.as_deref().unwrap_or(""),
                active: link.is_active(current_path),
            },
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            NavEntry::Dropdown { label, .. }
            | NavEntry::External { label, .. }
            | NavEntry::Internal { label, .. } => *label,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            NavEntry::Dropdown { active, .. } | NavEntry::Internal { active, .. } => *active,
            NavEntry::External { .. } => false,
        }
    }

    /// Class list for the rendered element.
    pub fn class(&self) -> String {
        let (base, modifier) = match self {
            NavEntry::Dropdown { active, .. } => {
                (TRIGGER_CLASS, active.then_some(ACTIVE_MODIFIER))
            }
            NavEntry::External { .. } => (LINK_CLASS, Some(EXTERNAL_MODIFIER)),
            NavEntry::Internal { active, .. } => (LINK_CLASS, active.then_some(ACTIVE_MODIFIER)),
        };
        merge_classes(base, modifier)
    }
}

/// Append `extra` to `base`, skipping blank or absent extras.
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|s| !s.is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> NavLink {
        NavLink::dropdown(
            "Resources",
            vec![
                NavLink::internal("Verified Data", "/resources/verified-data"),
                NavLink::internal("Decrypt", "/resources/decrypt"),
                NavLink::external("Docs", "https://docs.example.org"),
            ],
        )
    }

    #[test]
    fn dropdown_resolves_children_in_order() {
        let link = resources();
        let NavEntry::Dropdown { items, active, .. } = NavEntry::resolve(&link, "/blocks") else {
            panic!("expected dropdown");
        };
        assert!(!active);
        let labels: Vec<_> = items.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Verified Data", "Decrypt", "Docs"]);
    }

    #[test]
    fn dropdown_trigger_marked_active_for_child_route() {
        let link = resources();
        let entry = NavEntry::resolve(&link, "/resources/decrypt");
        assert!(entry.is_active());
        assert_eq!(entry.class(), "main-nav__trigger main-nav__link--active");
    }

    #[test]
    fn external_entry_is_a_plain_anchor() {
        let link = NavLink::external("Docs", "https://docs.example.org");
        let entry = NavEntry::resolve(&link, "https://docs.example.org");
        assert_eq!(
            entry,
            NavEntry::External {
                label: "Docs",
                href: Some("https://docs.example.org")
            }
        );
        assert_eq!(entry.class(), "main-nav__link main-nav__link--external");
        assert!(!entry.class().contains(ACTIVE_MODIFIER));
    }

    #[test]
    fn external_entry_without_href_omits_it() {
        let link = NavLink::external("Soon", "");
        assert_eq!(
            NavEntry::resolve(&link, "/"),
            NavEntry::External {
                label: "Soon",
                href: None
            }
        );
    }

    #[test]
    fn internal_entry_active_on_exact_path() {
        let link = NavLink::internal("Blocks", "/blocks");
        assert_eq!(
            NavEntry::resolve(&link, "/blocks").class(),
            "main-nav__link main-nav__link--active"
        );
        assert_eq!(NavEntry::resolve(&link, "/blocks/1").class(), LINK_CLASS);
    }

    #[test]
    fn internal_entry_without_href_targets_empty_string() {
        let link = NavLink {
            label: "Nowhere".into(),
            target: NavTarget::Internal(None),
        };
        assert_eq!(
            NavEntry::resolve(&link, ""),
            NavEntry::Internal {
                label: "Nowhere",
                href: "",
                active: false
            }
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let link = resources();
        assert_eq!(
            NavEntry::resolve(&link, "/resources/verified-data"),
            NavEntry::resolve(&link, "/resources/verified-data")
        );
    }

    #[test]
    fn merge_classes_skips_blank_extras() {
        assert_eq!(merge_classes(NAV_CLASS, None), "main-nav");
        assert_eq!(merge_classes(NAV_CLASS, Some("  ")), "main-nav");
        assert_eq!(merge_classes(NAV_CLASS, Some(" hidden-sm ")), "main-nav hidden-sm");
    }
}
