//! Navigation data model, descriptor config and view resolution.

mod config;
mod link;
mod view;

pub use config::{active_nav, explorer_nav, register_nav, NavConfig, NavConfigError};
pub use link::{duplicate_labels, NavLink, NavLinkDescriptor, NavTarget};
pub use view::{
    merge_classes, NavEntry, ACTIVE_MODIFIER, EXTERNAL_MODIFIER, LINK_CLASS, NAV_CLASS,
    TRIGGER_CLASS,
};
