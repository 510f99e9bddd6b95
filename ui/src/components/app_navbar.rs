use crate::i18n::{self};
use crate::nav::{active_nav, NavLink};
use crate::t;
use dioxus::prelude::*;

use super::main_nav::MainNav;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Explorer page header: brand, main navigation and locale switcher.
///
/// Renders `nav_links` when given, otherwise whatever `ui::nav::active_nav()`
/// returns (the list a platform installed with `register_nav`, or the built-in
/// explorer navigation).
///
/// The platform layout passes the current path so entries highlight the
/// active route:
/// ```ignore
/// #[component]
/// fn WebShell() -> Element {
///     let path = use_current_path::<Route>();
///     rsx! {
///         AppNavbar { current_path: path }
///         Outlet::<Route> {}
///     }
/// }
/// ```
///
/// The language selector triggers a re-render via a local signal; every render
/// pulls fresh localized strings via `t!`.
#[component]
pub fn AppNavbar(current_path: String, #[props(default)] nav_links: Option<Vec<NavLink>>) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        tracing::debug!(lang = %_lang_marker, path = %current_path, "AppNavbar render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let links = nav_links.unwrap_or_else(|| active_nav().to_vec());
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Chainscan" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                MainNav {
                    class: "navbar__links",
                    nav_links: links,
                    current_path: current_path.clone(),
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
