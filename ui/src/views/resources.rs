use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

#[component]
pub fn VerifiedData() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-verified-data",
            h1 { {t!("verified-data-title")} }
            p { {t!("verified-data-intro")} }
        }
    }
}

#[component]
pub fn Decrypt() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-decrypt",
            h1 { {t!("decrypt-title")} }
            p { {t!("decrypt-intro")} }
        }
    }
}
