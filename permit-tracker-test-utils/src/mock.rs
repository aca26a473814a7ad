//! Mock endpoints of the permit tracker API.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::TEST_ACCESS_TOKEN, error::TestError, fixtures::load_fixture, TestSetup};

impl TestSetup {
    /// `GET path` answering with the contents of a shipped fixture
    pub async fn with_fixture_endpoint(
        &mut self,
        path: &str,
        fixture: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = load_fixture(fixture).await?;

        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create_async()
            .await;

        Ok(mock)
    }

    /// `GET path` answering with the given JSON
    pub fn with_json_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// `GET path` with a single form-encoded query parameter
    pub fn with_query_endpoint(
        &mut self,
        path: &str,
        key: &str,
        value: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(Matcher::UrlEncoded(key.to_string(), value.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .expect(expected_requests)
            .create()
    }

    /// Endpoint failing with the given status and an empty body
    pub fn with_status_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// `POST /login` accepting exactly the given credentials as a form body
    pub fn with_login_endpoint(
        &mut self,
        username: &str,
        password: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_urlencoded::to_string([("username", username), ("password", password)])?;
        let token = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "bearer",
        });

        let mock = self
            .server
            .mock("POST", "/login")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::Exact(body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token.to_string())
            .expect(expected_requests)
            .create();

        Ok(mock)
    }

    /// Static `navbar.html` fragment as served next to the pages
    pub fn with_navbar_endpoint(&mut self, fragment: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("GET", "/navbar.html")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(fragment)
            .expect(expected_requests)
            .create()
    }
}
