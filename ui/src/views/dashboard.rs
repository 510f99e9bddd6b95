use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }
        }
    }
}
