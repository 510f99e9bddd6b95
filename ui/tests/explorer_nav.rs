//! Shape of the built-in explorer navigation and how it highlights routes.

use ui::nav::{duplicate_labels, explorer_nav, NavEntry, NavLink, NavTarget};

fn top_level(label: &str) -> &'static NavLink {
    explorer_nav()
        .iter()
        .find(|l| l.label == label)
        .unwrap_or_else(|| panic!("built-in navigation has no `{label}` entry"))
}

#[test]
fn builtin_navigation_order_is_preserved() {
    let labels: Vec<_> = explorer_nav().iter().map(|l| l.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Dashboard", "Batches", "Transactions", "Blocks", "Resources"]
    );
}

#[test]
fn builtin_navigation_has_unique_sibling_labels() {
    assert!(duplicate_labels(explorer_nav()).is_empty());
}

#[test]
fn resources_menu_lists_children_in_order() {
    let resources = top_level("Resources");
    let NavEntry::Dropdown { items, .. } = NavEntry::resolve(resources, "/") else {
        panic!("Resources should be a dropdown");
    };
    let labels: Vec<_> = items.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["Verified Data", "Decrypt", "Docs"]);
    assert!(matches!(items[2].target, NavTarget::External(_)));
}

#[test]
fn exactly_one_top_level_entry_is_active_per_route() {
    let cases = [
        ("/", "Dashboard"),
        ("/batches", "Batches"),
        ("/transactions", "Transactions"),
        ("/blocks", "Blocks"),
        ("/resources/verified-data", "Resources"),
        ("/resources/decrypt", "Resources"),
    ];

    for (path, expected) in cases {
        let active: Vec<_> = explorer_nav()
            .iter()
            .map(|l| NavEntry::resolve(l, path))
            .filter(NavEntry::is_active)
            .map(|e| e.label())
            .collect();
        assert_eq!(active, [expected], "route {path}");
    }
}

#[test]
fn nested_routes_only_highlight_the_dropdown() {
    // `/blocks/1` is not `/blocks`, and no dropdown child is a substring of it.
    let active = explorer_nav()
        .iter()
        .filter(|l| l.is_active("/blocks/1"))
        .count();
    assert_eq!(active, 0);
}
