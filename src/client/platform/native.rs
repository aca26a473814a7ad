use std::path::PathBuf;

use dioxus_logger::tracing;

use crate::client::{
    api::{
        fixture::FixtureSource,
        transport::{HttpRequest, HttpResponse, Method, Transport},
    },
    config::ApiConfig,
    error::{ApiError, TransportError},
};
use crate::model::session::SessionRecord;

pub type PlatformTransport = ReqwestTransport;
pub type PlatformFixtures = DirFixtureSource;

/// Resolve the configuration from `PERMIT_`-prefixed environment variables
pub fn resolve_config() -> ApiConfig {
    ApiConfig::from_env()
}

pub fn fixture_source(config: &ApiConfig) -> PlatformFixtures {
    DirFixtureSource::new(&config.fixture_root)
}

/// There is no page to insert a navbar into outside the browser
pub async fn load_page_navbar() {
    tracing::debug!("Skipping navbar injection outside the browser");
}

/// Without browser storage the session only lives for the current call
pub fn persist_login(record: &SessionRecord) {
    tracing::debug!(record = ?record, "Skipping session persistence outside the browser");
}

/// [`Transport`] backed by a shared `reqwest` client
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.options.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.options.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

/// Reads fixture files from a local directory
#[derive(Debug, Clone)]
pub struct DirFixtureSource {
    dir: PathBuf,
}

impl DirFixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FixtureSource for DirFixtureSource {
    async fn read(&self, file: &str) -> Result<Vec<u8>, ApiError> {
        tokio::fs::read(self.dir.join(file))
            .await
            .map_err(|e| ApiError::Fixture {
                file: file.to_string(),
                reason: e.to_string(),
            })
    }
}
