use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::model::api::TokenDto;

/// Local storage key holding the logged in user
pub const SESSION_USER_KEY: &str = "currentUser";

/// The user record persisted in local storage by the login flow.
///
/// The navbar only cares whether a record is present, so the content is kept as
/// opaque JSON rather than a fixed schema.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(transparent)]
pub struct SessionRecord(pub Value);

impl SessionRecord {
    /// Build the record written after a successful login
    pub fn from_login(username: &str, token: &TokenDto) -> Self {
        Self(json!({
            "username": username,
            "access_token": token.access_token,
            "token_type": token.token_type,
        }))
    }
}
