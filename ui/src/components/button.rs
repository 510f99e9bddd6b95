use dioxus::prelude::*;

use crate::nav::merge_classes;

#[derive(Copy, Clone, PartialEq, Default)]
#[non_exhaustive]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    /// No chrome at all; used for inline triggers such as nav dropdowns.
    Clear,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Ghost => "button button--ghost",
            ButtonVariant::Clear => "button button--clear",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_haspopup: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = merge_classes(variant.class(), class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: aria_label,
            aria_haspopup: aria_haspopup,
            aria_expanded: aria_expanded.map(|open| open.to_string()),
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            {children}
        }
    }
}
