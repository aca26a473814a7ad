//! Shared helpers for the integration tests.

use std::{cell::RefCell, rc::Rc};

use permit_tracker::client::{
    api::ApiClient,
    config::{ApiConfig, Mode},
    navbar::PageDom,
    notify::{Notifier, ToastKind},
    platform::{DirFixtureSource, ReqwestTransport},
};
use permit_tracker_test_utils::prelude::*;

pub type LiveClient = ApiClient<ReqwestTransport, DirFixtureSource, CollectingNotifier>;

/// Notifier remembering every message it was asked to show
#[derive(Clone, Default)]
pub struct CollectingNotifier {
    messages: Rc<RefCell<Vec<(String, ToastKind)>>>,
}

impl CollectingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn kinds(&self) -> Vec<ToastKind> {
        self.messages.borrow().iter().map(|(_, kind)| *kind).collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.messages.borrow_mut().push((message.to_string(), kind));
    }
}

/// Client in the given mode, pointed at the mock server and the shipped fixtures
pub fn client(mode: Mode, test: &TestSetup) -> (LiveClient, CollectingNotifier) {
    let notifier = CollectingNotifier::default();
    let config = ApiConfig::new(mode, test.base_url())
        .with_fixture_root(fixture_dir().to_string_lossy().into_owned());
    let fixtures = DirFixtureSource::new(fixture_dir());

    let client = ApiClient::new(config, ReqwestTransport::default(), fixtures, notifier.clone())
        .expect("endpoint table should be valid");

    (client, notifier)
}

/// Page stand-in recording what the navbar loader does to it
#[derive(Default)]
pub struct RecordingDom {
    pub pathname: String,
    pub body: RefCell<String>,
    pub navigations: RefCell<Vec<String>>,
    pub texts: RefCell<Vec<(String, String)>>,
    handlers: RefCell<Vec<(String, Rc<dyn Fn()>)>>,
}

impl RecordingDom {
    pub fn at(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            ..Self::default()
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.body.borrow().contains(&format!("id=\"{}\"", id))
    }

    pub fn click(&self, id: &str) -> bool {
        let handler = self
            .handlers
            .borrow()
            .iter()
            .find(|(handler_id, _)| handler_id == id)
            .map(|(_, handler)| Rc::clone(handler));

        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl PageDom for RecordingDom {
    fn insert_at_body_start(&self, html: &str) {
        self.body.borrow_mut().insert_str(0, html);
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_string());
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        if !self.has_element(id) {
            return false;
        }

        self.texts
            .borrow_mut()
            .push((id.to_string(), text.to_string()));
        true
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> bool {
        if !self.has_element(id) {
            return false;
        }

        self.handlers
            .borrow_mut()
            .push((id.to_string(), Rc::from(handler)));
        true
    }
}
