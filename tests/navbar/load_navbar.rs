//! Tests for the navbar loader fetching the fragment over HTTP.

use std::rc::Rc;

use permit_tracker::{
    client::{
        navbar::{load_navbar, LOGIN_LINK_ID, LOGIN_PAGE, LOGOUT_LABEL},
        platform::ReqwestTransport,
        session::{MemorySessionStore, SessionStore},
    },
    model::session::SESSION_USER_KEY,
};
use permit_tracker_test_utils::prelude::*;
use serde_json::json;

use crate::util::RecordingDom;

const FRAGMENT: &str = include_str!("../../public/navbar.html");

/// Tests a logged in visitor.
///
/// Expected: the shipped fragment is inserted, the link reads Logout and clicking
/// it clears storage and goes to the login page
#[tokio::test]
async fn rewires_login_link_for_session() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_navbar_endpoint(FRAGMENT, 1);
    test.mocks.push(mock);
    let dom = Rc::new(RecordingDom::at("/index.html"));
    let store = Rc::new(MemorySessionStore::default());
    store.set(SESSION_USER_KEY, &json!({ "username": TEST_USERNAME }));
    let url = format!("{}/navbar.html", test.base_url());

    load_navbar(&ReqwestTransport::default(), &url, Rc::clone(&dom), Rc::clone(&store)).await;

    assert!(dom.body.borrow().starts_with("<nav"));
    assert_eq!(
        dom.texts.borrow().clone(),
        vec![(LOGIN_LINK_ID.to_string(), LOGOUT_LABEL.to_string())]
    );
    assert!(dom.click(LOGIN_LINK_ID));
    assert!(store.current_user().is_none());
    assert_eq!(dom.navigations.borrow().clone(), vec![LOGIN_PAGE.to_string()]);
    test.assert_mocks();

    Ok(())
}

/// Tests a logged out visitor of the index page.
///
/// Expected: redirect to the login page
#[tokio::test]
async fn redirects_logged_out_index() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_navbar_endpoint(FRAGMENT, 1);
    test.mocks.push(mock);
    let dom = Rc::new(RecordingDom::at("/site/index.html"));
    let url = format!("{}/navbar.html", test.base_url());

    load_navbar(
        &ReqwestTransport::default(),
        &url,
        Rc::clone(&dom),
        Rc::new(MemorySessionStore::default()),
    )
    .await;

    assert_eq!(dom.navigations.borrow().clone(), vec![LOGIN_PAGE.to_string()]);
    assert!(dom.texts.borrow().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a missing fragment.
///
/// Expected: nothing inserted and no redirect
#[tokio::test]
async fn leaves_page_alone_without_fragment() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_status_endpoint("/navbar.html", 404, 1);
    test.mocks.push(mock);
    let dom = Rc::new(RecordingDom::at("/index.html"));
    let url = format!("{}/navbar.html", test.base_url());

    load_navbar(
        &ReqwestTransport::default(),
        &url,
        Rc::clone(&dom),
        Rc::new(MemorySessionStore::default()),
    )
    .await;

    assert!(dom.body.borrow().is_empty());
    assert!(dom.navigations.borrow().is_empty());
    test.assert_mocks();

    Ok(())
}
