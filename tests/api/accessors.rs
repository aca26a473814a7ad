//! Tests for the typed accessors against a mock API server.

use permit_tracker::client::config::Mode;
use permit_tracker_test_utils::prelude::*;
use serde_json::json;

use crate::util::client;

/// Tests a free-text activity name in the query string.
///
/// Expected: Ok, the server sees the decoded name
#[tokio::test]
async fn activity_name_round_trips() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let name = "Lake Day & Picnic = 100% fun";
    let mock = test.with_query_endpoint("/activity-information", "activity_name", name, 1);
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Production, &test);

    let result = client.get_activity_information(name).await;

    assert!(result.is_ok());
    assert!(notifier.messages().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a free-text group name in the path.
///
/// Expected: Ok with the needs served for the percent-encoded path
#[tokio::test]
async fn group_name_is_path_encoded() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let mock = test
        .with_fixture_endpoint("/identified-needs/Troop%2042", "needs.json", 1)
        .await?;
    test.mocks.push(mock);
    let (client, _) = client(Mode::Production, &test);

    let result = client.get_needs("Troop 42").await;

    assert_eq!(result.unwrap(), load_fixture_json("needs.json").await?);
    test.assert_mocks();

    Ok(())
}

/// Tests the user list passing records through untouched.
///
/// Verifies that a user stored without an active flag and with fields unknown to
/// the client still comes back as served.
///
/// Expected: Ok equal to the served JSON and no notification
#[tokio::test]
async fn users_pass_through_unknown_shapes() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let body = json!([
        { "id": 1, "first_name": "Sam", "is_active": null, "role": "leader" },
        { "id": 2, "first_name": "Jordan", "is_active": true, "groups": ["Troop 42"] }
    ]);
    let mock = test.with_json_endpoint("/users", &body, 1);
    test.mocks.push(mock);
    let (client, notifier) = client(Mode::Production, &test);

    let users = client.get_users().await;

    assert_eq!(users.unwrap(), body);
    assert!(notifier.messages().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests the user list in test mode.
///
/// Expected: Ok equal to the shipped fixture
#[tokio::test]
async fn users_equal_fixture_in_test_mode() -> Result<(), TestError> {
    let test = test_setup!()?;
    let (client, _) = client(Mode::Test, &test);

    let users = client.get_users().await;

    assert_eq!(users.unwrap(), load_fixture_json("user-examples.json").await?);

    Ok(())
}

/// Tests every accessor in test mode.
///
/// Expected: Ok for each accessor with no request reaching the server
#[tokio::test]
async fn every_accessor_has_a_fixture() -> Result<(), TestError> {
    let test = test_setup!()?;
    let (client, notifier) = client(Mode::Test, &test);

    assert!(client.get_users().await.is_ok());
    assert!(client.get_user_activities("1").await.is_ok());
    assert!(client.get_group_activities("Troop 42").await.is_ok());
    assert!(client.get_all_activities().await.is_ok());
    assert!(client.get_activity_information("Lake Day").await.is_ok());
    assert!(client.get_activity_review("1").await.is_ok());
    assert!(client.get_activity_permissions("1").await.is_ok());
    assert!(client.get_needs("Troop 42").await.is_ok());
    assert!(notifier.messages().is_empty());

    Ok(())
}
