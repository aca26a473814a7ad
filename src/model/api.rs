use serde::{Deserialize, Serialize};

/// Form body sent to `POST /login`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// The response of a successful login
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenDto {
    /// Bearer token for subsequent API requests
    pub access_token: String,
    pub token_type: String,
}
