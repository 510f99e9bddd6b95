//! Locale bundles stay in step with the fallback and with the sources.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/chainscan-ui.ftl");
const TRANSLATIONS: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/chainscan-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/chainscan-ui.ftl")),
];

/// Message ids defined in `src`, in file order. Comments, attributes and
/// continuation lines are skipped.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn unique_ids(locale: &str, src: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for id in message_ids(src) {
        assert!(ids.insert(id.to_string()), "{locale}: `{id}` defined twice");
    }
    ids
}

#[test]
fn translations_cover_fallback() {
    let fallback = unique_ids("en-US", EN_US);
    assert!(!fallback.is_empty());

    for (locale, src) in TRANSLATIONS {
        let ids = unique_ids(locale, src);
        let missing: Vec<_> = fallback.difference(&ids).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
    }
}

/// Literal keys of every `t!("...")` call in `.rs` files under `dir`.
fn referenced_keys(dir: &Path, keys: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            referenced_keys(&path, keys);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, _) in content.match_indices("t!(\"") {
            // `format!(`, `assert!(` ...
            if content[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
            {
                continue;
            }
            let rest = &content[idx + 4..];
            if let Some(key) = rest.split('"').next().filter(|k| !k.is_empty()) {
                keys.insert(key.to_string());
            }
        }
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let mut referenced = BTreeSet::new();
    referenced_keys(
        &PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"),
        &mut referenced,
    );
    assert!(referenced.contains("nav-menu-toggle"));

    let fallback = unique_ids("en-US", EN_US);
    let missing: Vec<_> = referenced.difference(&fallback).collect();
    assert!(missing.is_empty(), "keys used but not in en-US: {missing:?}");
}
