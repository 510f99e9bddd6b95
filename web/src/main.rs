use dioxus::prelude::*;

use ui::components::{use_current_path, AppNavbar};
use ui::views::{Batches, Blocks, Dashboard, Decrypt, Transactions, VerifiedData};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected language here; views subscribe to it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared header, highlighted for the current route, above
/// the routed page.
#[component]
fn WebShell() -> Element {
    let path = use_current_path::<Route>();
    tracing::trace!(%path, "route change");

    rsx! {
        AppNavbar { current_path: path }
        Outlet::<Route> {}
    }
}
