use std::rc::Rc;

use dioxus_logger::tracing;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use serde_json::Value;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::client::{
    api::{
        fixture::HttpFixtureSource,
        transport::{HttpRequest, HttpResponse, Method, Transport},
    },
    config::ApiConfig,
    error::TransportError,
    navbar::{self, PageDom, NAVBAR_FRAGMENT},
    session::SessionStore,
};
use crate::model::session::SessionRecord;

pub type PlatformTransport = ReqwasmTransport;
pub type PlatformFixtures = HttpFixtureSource<ReqwasmTransport>;

/// Resolve the configuration from the page's global variables
pub fn resolve_config() -> ApiConfig {
    ApiConfig::from_window()
}

/// Fixtures are fetched relative to the page
pub fn fixture_source(config: &ApiConfig) -> PlatformFixtures {
    HttpFixtureSource::new(ReqwasmTransport, config.fixture_root.clone())
}

impl ApiConfig {
    /// Resolve the configuration from `window.ENV`, `window.API_BASE` and
    /// `window.FIXTURE_ROOT`
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window available, using the default configuration");
            return Self::default();
        };

        Self::from_lookup(|key| {
            js_sys::Reflect::get(&window, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
        })
    }
}

/// Insert the shared navbar into the current page
pub async fn load_page_navbar() {
    navbar::load_navbar(
        &ReqwasmTransport,
        NAVBAR_FRAGMENT,
        Rc::new(BrowserDom),
        Rc::new(LocalSessionStore),
    )
    .await;
}

/// Store the logged in user in local storage and open the index page
pub fn persist_login(record: &SessionRecord) {
    navbar::complete_login(&BrowserDom, &LocalSessionStore, record);
}

/// [`Transport`] backed by the browser's fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use reqwasm::http::Request;

        let method = match request.options.method {
            Method::Get => reqwasm::http::Method::GET,
            Method::Post => reqwasm::http::Method::POST,
        };

        let mut builder = Request::new(&request.url).method(method);
        for (name, value) in &request.options.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.options.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// [`SessionStore`] over the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<Value> {
        match LocalStorage::get::<Value>(key) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!("Ignoring unreadable local storage entry {}: {}", key, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &Value) {
        if let Err(err) = LocalStorage::set(key, value) {
            tracing::error!("Failed to write local storage entry {}: {}", key, err);
        }
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}

/// [`PageDom`] over the live document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDom;

impl BrowserDom {
    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }
}

impl PageDom for BrowserDom {
    fn insert_at_body_start(&self, html: &str) {
        let Some(body) = Self::document().and_then(|document| document.body()) else {
            tracing::warn!("No document body to insert the navbar into");
            return;
        };

        if let Err(err) = body.insert_adjacent_html("afterbegin", html) {
            tracing::warn!("Failed to insert navbar markup: {:?}", err);
        }
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Err(err) = window.location().set_href(href) {
            tracing::error!("Failed to navigate to {}: {:?}", href, err);
        }
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        match Self::document().and_then(|document| document.get_element_by_id(id)) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool {
        let Some(element) = Self::document().and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            handler();
        });

        if let Err(err) =
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach click handler to #{}: {:?}", id, err);
            return false;
        }

        // The listener lives as long as the element
        closure.forget();
        true
    }
}
