use dioxus::prelude::*;

use crate::client::{platform, router::Route};

/// Layout loading the shared navbar fragment once per mount
#[component]
pub fn Navbar() -> Element {
    use_hook(|| spawn(platform::load_page_navbar()));

    rsx! {
        Outlet::<Route> {}
    }
}
