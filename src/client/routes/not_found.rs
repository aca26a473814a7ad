use dioxus::prelude::*;

use crate::client::{components::Page, navbar::INDEX_PAGE};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "justify-center text-center",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "opacity-70", "Nothing lives at /{path}" }
            a { class: "btn btn-outline mt-4", href: INDEX_PAGE, "Back to activities" }
        }
    )
}
