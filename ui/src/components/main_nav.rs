//! Declarative navigation bar.
//!
//! `MainNav` renders one `NavItem` per descriptor. Each `NavItem` resolves its
//! link against the current path (see [`NavEntry::resolve`]) and renders a
//! dropdown, a plain anchor or a router `Link`.
//!
//! The current path comes from the platform crate, which owns the concrete
//! `Route` enum:
//! ```ignore
//! #[component]
//! fn Shell() -> Element {
//!     let path = ui::components::use_current_path::<Route>();
//!     rsx! { MainNav { nav_links: ui::nav::active_nav().to_vec(), current_path: path } }
//! }
//! ```

use dioxus::prelude::*;

use super::dropdown::{
    DropdownMenu, DropdownMenuContent, DropdownMenuGroup, DropdownMenuItem, DropdownMenuTrigger,
};
use super::icons::ChevronDownIcon;
use crate::nav::{merge_classes, NavEntry, NavLink, NAV_CLASS};
use crate::t;

/// Path of the active route, re-read whenever the router changes route.
pub fn use_current_path<R: Routable + Clone>() -> String {
    use_route::<R>().to_string()
}

#[component]
pub fn NavItem(nav_link: NavLink, current_path: String) -> Element {
    let entry = NavEntry::resolve(&nav_link, &current_path);
    let class = entry.class();

    match entry {
        NavEntry::Dropdown { label, items, .. } => {
            // Usable without AppNavbar, which otherwise loads the bundles.
            crate::i18n::init();
            let toggle_label = t!("nav-menu-toggle", menu = label);
            rsx! {
                DropdownMenu { class: "main-nav__dropdown",
                    DropdownMenuTrigger { class: class, label: toggle_label,
                        "{label}"
                        ChevronDownIcon { class: "main-nav__chevron" }
                    }
                    DropdownMenuContent { class: "main-nav__menu",
                        DropdownMenuGroup {
                            for child in items.iter() {
                                DropdownMenuItem { key: "{child.label}",
                                    NavItem {
                                        nav_link: child.clone(),
                                        current_path: current_path.clone(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        NavEntry::External { label, href } => rsx! {
            a { class: "{class}", href: href.map(str::to_string), "{label}" }
        },
        NavEntry::Internal { label, href, .. } => rsx! {
            Link { class: class, to: href.to_string(), "{label}" }
        },
    }
}

#[component]
pub fn MainNav(
    nav_links: Vec<NavLink>,
    #[props(default)] class: Option<String>,
    current_path: String,
) -> Element {
    #[cfg(debug_assertions)]
    {
        tracing::debug!(path = %current_path, entries = nav_links.len(), "MainNav render");
    }

    let class = merge_classes(NAV_CLASS, class.as_deref());

    rsx! {
        nav { class: "{class}",
            for link in nav_links.iter() {
                NavItem {
                    key: "{link.label}",
                    nav_link: link.clone(),
                    current_path: current_path.clone(),
                }
            }
        }
    }
}
