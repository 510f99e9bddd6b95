//! Chain listing pages.

use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Batches() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-batches",
            h1 { {t!("batches-title")} }
            p { {t!("batches-intro")} }
        }
    }
}

#[component]
pub fn Transactions() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-transactions",
            h1 { {t!("transactions-title")} }
            p { {t!("transactions-intro")} }
        }
    }
}

#[component]
pub fn Blocks() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-blocks",
            h1 { {t!("blocks-title")} }
            p { {t!("blocks-intro")} }
        }
    }
}
