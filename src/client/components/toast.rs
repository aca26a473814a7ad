use dioxus::prelude::*;

use crate::client::notify::ToastQueue;

/// Stack of toasts in the top right corner, newest last
#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();

    rsx! {
        div { class: "toast toast-top toast-end z-50",
            for toast in toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.class()} transition-opacity duration-500",
                    class: if toast.fading { "opacity-0" },
                    span { "{toast.message}" }
                }
            }
        }
    }
}
