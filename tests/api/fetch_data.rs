//! Tests for ApiClient::fetch_data against a mock API server.
//!
//! Production mode goes through the real `reqwest` transport; test mode reads the
//! fixtures shipped in `public/test_data`.

use permit_tracker::client::{
    api::transport::RequestOptions, config::Mode, error::ErrorKind, notify::ToastKind,
};
use permit_tracker_test_utils::prelude::*;
use serde_json::Value;

use crate::util::client;

/// Tests a successful live request.
///
/// Expected: Ok with the served JSON and no notification
#[tokio::test]
async fn returns_live_data() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test
        .with_fixture_endpoint("/users", "user-examples.json", 1)
        .await?;
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Production, &test);

    let result: Result<Value, _> = client
        .fetch_data("/users", "user-examples.json", RequestOptions::default())
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), load_fixture_json("user-examples.json").await?);
    assert!(notifier.messages().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests the notification raised for a non-success status.
///
/// Expected: Err with the status and exactly one error toast
#[tokio::test]
async fn notifies_once_on_status_error() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_status_endpoint("/users", 404, 1);
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Production, &test);

    let result: Result<Value, _> = client
        .fetch_data("/users", "user-examples.json", RequestOptions::default())
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(notifier.messages(), vec!["API error 404: Not Found"]);
    assert_eq!(notifier.kinds(), vec![ToastKind::Error]);
    test.assert_mocks();

    Ok(())
}

/// Tests test mode reading a shipped fixture.
///
/// Expected: Ok equal to the fixture and no request to the server
#[tokio::test]
async fn returns_fixture_in_test_mode() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test.with_status_endpoint("/identified-needs/scouts", 500, 0);
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Test, &test);

    let result: Result<Value, _> = client
        .fetch_data("/identified-needs/scouts", "needs.json", RequestOptions::default())
        .await;

    assert_eq!(result.unwrap(), load_fixture_json("needs.json").await?);
    assert!(notifier.messages().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests test mode without a fixture name.
///
/// Expected: Err with a configuration error and one toast naming the endpoint
#[tokio::test]
async fn fails_without_fixture_in_test_mode() -> Result<(), TestError> {
    let test = test_setup!()?;
    let (client, notifier) = client(Mode::Test, &test);

    let result: Result<Value, _> = client
        .fetch_data("/users", "", RequestOptions::default())
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Configuration);
    assert_eq!(notifier.messages(), vec!["No fallback JSON defined for /users"]);

    Ok(())
}

/// Tests a fixture that does not exist on disk.
///
/// Expected: Err with an unexpected error and one toast
#[tokio::test]
async fn fails_on_unknown_fixture_file() -> Result<(), TestError> {
    let test = test_setup!()?;
    let (client, notifier) = client(Mode::Test, &test);

    let result: Result<Value, _> = client
        .fetch_data("/users", "no-such-fixture.json", RequestOptions::default())
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Unexpected);
    assert_eq!(notifier.messages().len(), 1);

    Ok(())
}
