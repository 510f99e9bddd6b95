//! Loading navigation descriptors from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::{Lazy, OnceCell};

use super::link::{duplicate_labels, NavLink};

/// Built-in explorer navigation (`assets/nav/explorer.json`).
const EXPLORER_NAV_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/nav/explorer.json"
));

#[derive(Debug, thiserror::Error)]
pub enum NavConfigError {
    #[error("failed to read navigation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid navigation descriptors: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation entry #{index} has an empty label")]
    EmptyLabel { index: usize },
}

/// Entry points for turning descriptor files into [`NavLink`] lists.
pub struct NavConfig;

impl NavConfig {
    /// Parse a JSON array of flag-based descriptors.
    pub fn from_json(src: &str) -> Result<Vec<NavLink>, NavConfigError> {
        let links: Vec<NavLink> = serde_json::from_str(src)?;
        validate(&links)?;
        Ok(links)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<NavLink>, NavConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| NavConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&src)
    }
}

/// Rejects blank labels; `index` counts entries in pre-order.
fn validate(links: &[NavLink]) -> Result<(), NavConfigError> {
    fn walk(links: &[NavLink], index: &mut usize) -> Result<(), NavConfigError> {
        for link in links {
            if link.label.trim().is_empty() {
                return Err(NavConfigError::EmptyLabel { index: *index });
            }
            *index += 1;
            walk(link.children(), index)?;
        }
        Ok(())
    }

    let dups = duplicate_labels(links);
    if !dups.is_empty() {
        tracing::warn!(labels = ?dups, "navigation has duplicate sibling labels");
    }

    walk(links, &mut 0)
}

static EXPLORER_NAV: Lazy<Vec<NavLink>> = Lazy::new(|| {
    NavConfig::from_json(EXPLORER_NAV_JSON).unwrap_or_else(|err| {
        tracing::error!("built-in navigation is invalid ({err}); rendering an empty bar");
        Vec::new()
    })
});

static REGISTERED_NAV: OnceCell<Vec<NavLink>> = OnceCell::new();

/// The navigation shipped with the explorer.
pub fn explorer_nav() -> &'static [NavLink] {
    &EXPLORER_NAV
}

/// Install the navigation rendered by `AppNavbar`. Only the first call wins.
pub fn register_nav(links: Vec<NavLink>) {
    let dups = duplicate_labels(&links);
    if !dups.is_empty() {
        tracing::warn!(labels = ?dups, "registered navigation has duplicate sibling labels");
    }
    if REGISTERED_NAV.set(links).is_err() {
        tracing::debug!("navigation already registered; keeping the first list");
    }
}

/// The registered navigation, or the built-in explorer navigation.
pub fn active_nav() -> &'static [NavLink] {
    REGISTERED_NAV
        .get()
        .map(Vec::as_slice)
        .unwrap_or_else(explorer_nav)
}
