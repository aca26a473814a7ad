use std::rc::Rc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::ToastContainer,
    error::ConfigError,
    notify::{expire_toast, Notifier, ToastKind, ToastQueue, ToastStore},
    platform::{self, PlatformFixtures, PlatformTransport},
    router::Route,
};

/// Data access client shared with every route through context
pub type AppClient = ApiClient<PlatformTransport, PlatformFixtures, ToastNotifier>;

/// [`Notifier`] pushing toasts onto the app-wide [`ToastQueue`]
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<ToastQueue>) -> Self {
        Self { toasts }
    }
}

impl ToastStore for Signal<ToastQueue> {
    fn update(&mut self, f: impl FnOnce(&mut ToastQueue)) {
        f(&mut self.write());
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(message, kind);

        // Expiry must outlive the component that triggered the toast
        spawn_forever(expire_toast(toasts, id));
    }
}

fn build_client(notifier: ToastNotifier) -> Result<AppClient, ConfigError> {
    let config = platform::resolve_config();
    let fixtures = platform::fixture_source(&config);

    ApiClient::new(config, PlatformTransport::default(), fixtures, notifier)
}

#[component]
pub fn App() -> Element {
    let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));

    let ready = use_hook(|| match build_client(ToastNotifier::new(toasts)) {
        Ok(client) => {
            provide_context(Rc::new(client));
            true
        }
        Err(err) => {
            tracing::error!("Invalid endpoint configuration: {}", err);
            false
        }
    });

    rsx! {
        if ready {
            Router::<Route> {}
        } else {
            div { class: "min-h-screen flex items-center justify-center",
                p { "The application is misconfigured, see the console for details." }
            }
        }
        ToastContainer {}
    }
}
