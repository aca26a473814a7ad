use dioxus::prelude::*;

/// Centered page body with an optional extra class
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen p-4 flex flex-col items-center {class}",
            div { class: "w-full max-w-[960px]",
                {children}
            }
        }
    )
}
