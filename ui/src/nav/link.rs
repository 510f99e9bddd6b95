//! Navigation link descriptors.
//!
//! `NavLink` is the in-memory form every component consumes. The flag-based
//! `NavLinkDescriptor` only exists at the configuration boundary (JSON files),
//! where a descriptor may carry both `isDropdown` and `isExternal`; the
//! dropdown flag wins.

use serde::{Deserialize, Serialize};

/// One entry of the navigation bar, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NavLinkDescriptor", into = "NavLinkDescriptor")]
pub struct NavLink {
    /// Display text. Also the render key, so it should be unique among siblings.
    pub label: String,
    pub target: NavTarget,
}

/// What activating a [`NavLink`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Opens a submenu of child links, in order.
    Dropdown(Vec<NavLink>),
    /// Plain anchor leaving the client-side router.
    External(String),
    /// Client-side navigation; `None` renders a link to `""`.
    Internal(Option<String>),
}

impl NavLink {
    pub fn internal(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Internal(Some(href.into())),
        }
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::External(href.into()),
        }
    }

    pub fn dropdown(label: impl Into<String>, children: Vec<NavLink>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Dropdown(children),
        }
    }

    /// Destination of this link, if it has one. Dropdowns never do.
    pub fn href(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Dropdown(_) => None,
            NavTarget::External(href) => Some(href),
            NavTarget::Internal(href) => href.as_deref(),
        }
    }

    pub fn children(&self) -> &[NavLink] {
        match &self.target {
            NavTarget::Dropdown(children) => children,
            _ => &[],
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.target, NavTarget::Dropdown(_))
    }

    pub fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }

    /// Whether this link corresponds to `current_path`.
    ///
    /// Internal links match on exact equality. A dropdown is active when any
    /// direct child with a non-empty `href` is a substring of the path.
    /// External links are never active.
    pub fn is_active(&self, current_path: &str) -> bool {
        match &self.target {
            NavTarget::Internal(Some(href)) => current_path == href.as_str(),
            NavTarget::Internal(None) | NavTarget::External(_) => false,
            NavTarget::Dropdown(children) => children.iter().any(|child| {
                child
                    .href()
                    .is_some_and(|href| !href.is_empty() && current_path.contains(href))
            }),
        }
    }
}

/// Flag-based descriptor, as written in navigation config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLinkDescriptor {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub is_dropdown: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_nav_links: Option<Vec<NavLinkDescriptor>>,
}

impl From<NavLinkDescriptor> for NavLink {
    fn from(desc: NavLinkDescriptor) -> Self {
        let target = if desc.is_dropdown {
            NavTarget::Dropdown(
                desc.sub_nav_links
                    .unwrap_or_default()
                    .into_iter()
                    .map(NavLink::from)
                    .collect(),
            )
        } else if desc.is_external {
            NavTarget::External(desc.href.unwrap_or_default())
        } else {
            NavTarget::Internal(desc.href)
        };

        Self {
            label: desc.label,
            target,
        }
    }
}

impl From<NavLink> for NavLinkDescriptor {
    fn from(link: NavLink) -> Self {
        let mut desc = NavLinkDescriptor {
            label: link.label,
            ..Default::default()
        };
        match link.target {
            NavTarget::Dropdown(children) => {
                desc.is_dropdown = true;
                desc.sub_nav_links = Some(children.into_iter().map(Into::into).collect());
            }
            NavTarget::External(href) => {
                desc.is_external = true;
                desc.href = Some(href);
            }
            NavTarget::Internal(href) => desc.href = href,
        }
        desc
    }
}

/// Labels that appear more than once among the same siblings, at any depth.
///
/// Each duplicate is reported once per sibling list, in first-seen order.
pub fn duplicate_labels(links: &[NavLink]) -> Vec<String> {
    let mut dups = Vec::new();
    collect_duplicates(links, &mut dups);
    dups
}

fn collect_duplicates(links: &[NavLink], dups: &mut Vec<String>) {
    let mut seen: Vec<&str> = Vec::with_capacity(links.len());
    let mut reported: Vec<&str> = Vec::new();
    for link in links {
        let label = link.label.as_str();
        if seen.contains(&label) {
            if !reported.contains(&label) {
                reported.push(label);
                dups.push(label.to_string());
            }
        } else {
            seen.push(label);
        }
        collect_duplicates(link.children(), dups);
    }
}
