#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{use_current_path, AppNavbar};
use ui::nav::{register_nav, NavConfig};
use ui::views::{Batches, Blocks, Dashboard, Decrypt, Transactions, VerifiedData};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/batches")]
    Batches {},
    #[route("/transactions")]
    Transactions {},
    #[route("/blocks")]
    Blocks {},
    #[route("/resources/verified-data")]
    VerifiedData {},
    #[route("/resources/decrypt")]
    Decrypt {},
}

/// Environment variable naming a JSON navigation file that replaces the
/// built-in explorer navigation.
const NAV_FILE_ENV: &str = "CHAINSCAN_NAV";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    install_nav_override();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Chainscan – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    install_nav_override();
    LaunchBuilder::server().launch(App);
}

/// Register the navigation from `$CHAINSCAN_NAV`, keeping the built-in one on error.
fn install_nav_override() {
    let Some(path) = std::env::var_os(NAV_FILE_ENV) else {
        return;
    };
    match NavConfig::from_path(&path) {
        Ok(links) => {
            tracing::info!(path = ?path, entries = links.len(), "using navigation override");
            register_nav(links);
        }
        Err(err) => {
            tracing::error!("{err}; falling back to the built-in navigation");
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar (shared) updates this via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language to force a full remount on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared header, bound to the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let path = use_current_path::<Route>();

    rsx! {
        AppNavbar { current_path: path }

        Outlet::<Route> {}
    }
}
