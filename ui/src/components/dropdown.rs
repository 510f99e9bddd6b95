//! Minimal dropdown menu primitives.
//!
//! `DropdownMenu` owns the open/closed toggle and shares it with its parts
//! through context. The content stays mounted and is hidden while closed.
//! An open menu closes on Escape, on a click outside it (a transparent
//! backdrop covers the page) or when one of its items is activated.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::nav::merge_classes;

#[derive(Clone, Copy)]
struct DropdownState {
    open: Signal<bool>,
}

#[component]
pub fn DropdownMenu(
    #[props(default)] class: Option<String>,
    #[props(default)] default_open: bool,
    children: Element,
) -> Element {
    let mut open = use_signal(|| default_open);
    use_context_provider(|| DropdownState { open });

    let class = merge_classes("dropdown", class.as_deref());
    let state = if open() { "open" } else { "closed" };

    rsx! {
        div {
            class: "{class}",
            "data-state": state,
            onkeydown: move |evt: KeyboardEvent| {
                if open() && dismisses(&evt.key()) {
                    evt.stop_propagation();
                    open.set(false);
                }
            },
            {children}
        }
    }
}

fn dismisses(key: &Key) -> bool {
    *key == Key::Escape
}

#[component]
pub fn DropdownMenuTrigger(
    #[props(default)] class: Option<String>,
    #[props(default)] label: Option<String>,
    children: Element,
) -> Element {
    let mut open = use_context::<DropdownState>().open;

    rsx! {
        Button {
            variant: ButtonVariant::Clear,
            class: merge_classes("dropdown__trigger", class.as_deref()),
            aria_haspopup: "menu",
            aria_expanded: open(),
            aria_label: label.unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                // Nested menus sit inside a parent item, which would close on bubble.
                evt.stop_propagation();
                let next = !open();
                open.set(next);
            },
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let mut open = use_context::<DropdownState>().open;
    let class = merge_classes("dropdown__content", class.as_deref());

    rsx! {
        if open() {
            div {
                class: "dropdown__backdrop",
                "aria-hidden": "true",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    open.set(false);
                },
            }
        }
        div { class: "{class}", role: "menu", hidden: !open(), {children} }
    }
}

#[component]
pub fn DropdownMenuGroup(children: Element) -> Element {
    rsx! {
        div { class: "dropdown__group", role: "group", {children} }
    }
}

/// Wraps one menu entry; activating it closes the enclosing menu.
#[component]
pub fn DropdownMenuItem(children: Element) -> Element {
    let mut open = use_context::<DropdownState>().open;

    rsx! {
        div {
            class: "dropdown__item",
            role: "menuitem",
            onclick: move |_| open.set(false),
            {children}
        }
    }
}
