//! Shared navbar injection.
//!
//! The navbar markup lives in a static `navbar.html` fragment shared by every
//! page. After inserting it, the login link is switched to a logout link when a
//! session record is present, and logged out visitors of the index page are
//! sent to the login page.

use std::rc::Rc;

use dioxus_logger::tracing;

use crate::{
    client::{
        api::transport::{HttpRequest, Transport},
        session::SessionStore,
    },
    model::session::SessionRecord,
};

pub const NAVBAR_FRAGMENT: &str = "navbar.html";
pub const LOGIN_LINK_ID: &str = "login-link";
pub const LOGIN_PAGE: &str = "login.html";
pub const INDEX_PAGE: &str = "index.html";
pub const LOGOUT_LABEL: &str = "Logout";

/// The parts of the page the navbar loader touches
pub trait PageDom {
    /// Insert markup as the first children of `<body>`
    fn insert_at_body_start(&self, html: &str);

    fn pathname(&self) -> String;

    fn navigate(&self, href: &str);

    /// Replace the text of an element, returning `false` when no element has the id
    fn set_text(&self, id: &str, text: &str) -> bool;

    /// Attach a click handler that replaces the default action, returning
    /// `false` when no element has the id
    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    /// Logged out on the index page
    RedirectToLogin,
    LoggedOut,
    LoggedIn,
}

pub fn resolve_navbar_state(logged_in: bool, pathname: &str) -> NavbarState {
    if logged_in {
        NavbarState::LoggedIn
    } else if pathname.ends_with(INDEX_PAGE) {
        NavbarState::RedirectToLogin
    } else {
        NavbarState::LoggedOut
    }
}

/// Fetch the navbar fragment, insert it and apply the session state.
///
/// A failed fetch leaves the page without a navbar; nothing is retried.
pub async fn load_navbar<T, D, S>(transport: &T, fragment_url: &str, dom: Rc<D>, store: Rc<S>)
where
    T: Transport,
    D: PageDom + 'static,
    S: SessionStore + 'static,
{
    let response = match transport.send(HttpRequest::get(fragment_url)).await {
        Ok(response) if response.is_success() => response,
        Ok(response) => {
            tracing::warn!(
                status = response.status,
                "Navbar fragment {} unavailable: {}",
                fragment_url,
                response.status_text
            );
            return;
        }
        Err(err) => {
            tracing::warn!("Navbar fragment {} unavailable: {}", fragment_url, err);
            return;
        }
    };

    dom.insert_at_body_start(&response.text());

    apply_session(dom, store);
}

/// Redirect or rewire the login link according to the stored session
pub fn apply_session<D, S>(dom: Rc<D>, store: Rc<S>) -> NavbarState
where
    D: PageDom + 'static,
    S: SessionStore + 'static,
{
    let state = resolve_navbar_state(store.current_user().is_some(), &dom.pathname());

    match state {
        NavbarState::RedirectToLogin => dom.navigate(LOGIN_PAGE),
        NavbarState::LoggedOut => {}
        NavbarState::LoggedIn => {
            if !dom.set_text(LOGIN_LINK_ID, LOGOUT_LABEL) {
                tracing::warn!("No #{} element in the navbar fragment", LOGIN_LINK_ID);
                return state;
            }

            let handler_dom = Rc::clone(&dom);
            let handler_store = Rc::clone(&store);
            dom.on_click(
                LOGIN_LINK_ID,
                Box::new(move || logout(handler_dom.as_ref(), handler_store.as_ref())),
            );
        }
    }

    state
}

/// Persist the session record of a successful login and go to the index page
pub fn complete_login<D: PageDom, S: SessionStore>(dom: &D, store: &S, record: &SessionRecord) {
    store.set_current_user(record);
    dom.navigate(INDEX_PAGE);
}

/// Forget everything stored locally and go to the login page
pub fn logout<D: PageDom, S: SessionStore>(dom: &D, store: &S) {
    store.clear();
    dom.navigate(LOGIN_PAGE);
}
