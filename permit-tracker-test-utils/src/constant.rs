//! Placeholder credentials used across the mock API tests.
//!
//! None of these are real accounts.

/// Login name sent by the login tests
pub static TEST_USERNAME: &str = "guardian@example.com";

/// Password sent by the login tests, with characters that need form encoding
pub static TEST_PASSWORD: &str = "p@ss word&more=1";

/// Token returned by the mock `/login` endpoint
pub static TEST_ACCESS_TOKEN: &str = "mock-access-token";
