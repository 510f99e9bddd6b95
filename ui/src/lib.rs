//! Shared UI crate for Chainscan. Navigation, components and views live here;
//! the platform crates only own their `Route` enum and launch code.

pub mod components;
pub mod i18n;
pub mod nav;
pub mod views;
