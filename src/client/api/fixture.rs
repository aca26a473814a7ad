use crate::client::{
    api::transport::{HttpRequest, Transport},
    error::ApiError,
};

/// Reads the raw bytes of a named fixture file in test mode
#[allow(async_fn_in_trait)]
pub trait FixtureSource {
    async fn read(&self, file: &str) -> Result<Vec<u8>, ApiError>;
}

/// Fetches fixtures over HTTP, relative to the page in the browser.
pub struct HttpFixtureSource<T> {
    transport: T,
    root: String,
}

impl<T: Transport> HttpFixtureSource<T> {
    pub fn new(transport: T, root: impl Into<String>) -> Self {
        Self {
            transport,
            root: root.into(),
        }
    }
}

impl<T: Transport> FixtureSource for HttpFixtureSource<T> {
    async fn read(&self, file: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/{}", self.root.trim_end_matches('/'), file);
        let response = self.transport.send(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(ApiError::Fixture {
                file: file.to_string(),
                reason: format!("{} {}", response.status, response.status_text),
            });
        }

        Ok(response.body)
    }
}
