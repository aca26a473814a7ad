//! Tests for the login accessor.

use permit_tracker::{client::config::Mode, model::api::LoginForm};
use permit_tracker_test_utils::prelude::*;

use crate::util::client;

fn credentials() -> LoginForm {
    LoginForm {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Tests the login request in production mode.
///
/// Verifies the request is a form-encoded POST whose body holds exactly the
/// username and password.
///
/// Expected: Ok with the token served by the mock
#[tokio::test]
async fn posts_form_credentials() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_login_endpoint(TEST_USERNAME, TEST_PASSWORD, 1)?;
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Production, &test);

    let token = client.login(&credentials()).await;

    assert!(token.is_ok());
    assert_eq!(token.unwrap().access_token, TEST_ACCESS_TOKEN);
    assert!(notifier.messages().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests login in test mode.
///
/// Expected: Ok with the login fixture and no request to the server
#[tokio::test]
async fn returns_fixture_token_in_test_mode() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_login_endpoint(TEST_USERNAME, TEST_PASSWORD, 0)?;
    test.mocks.push(mock);
    let (client, _) = client(Mode::Test, &test);

    let token = client.login(&credentials()).await;

    let expected = load_fixture_json("login_fallback.json").await?;
    assert_eq!(token.unwrap().access_token, expected["access_token"]);
    test.assert_mocks();

    Ok(())
}
