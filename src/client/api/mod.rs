//! Data access facade for the Youth Permission Tracker API.
//!
//! All accessors go through [`ApiClient::fetch_data`], which either reads a
//! fixture file (test mode) or calls the live API (production mode). Any error
//! is logged and shown to the user once through the injected [`Notifier`]
//! before being returned to the caller.

pub mod accessors;
pub mod endpoint;
pub mod fixture;
pub mod transport;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::client::{
    api::{
        endpoint::{EndpointArgs, EndpointTable, Operation},
        fixture::FixtureSource,
        transport::{HttpRequest, RequestOptions, Transport},
    },
    config::{ApiConfig, Mode},
    error::{ApiError, ConfigError},
    notify::{Notifier, ToastKind},
};

pub struct ApiClient<T, F, N> {
    config: ApiConfig,
    endpoints: EndpointTable,
    transport: T,
    fixtures: F,
    notifier: N,
}

impl<T, F, N> ApiClient<T, F, N>
where
    T: Transport,
    F: FixtureSource,
    N: Notifier,
{
    /// Creates a new [`ApiClient`], validating the endpoint table
    pub fn new(config: ApiConfig, transport: T, fixtures: F, notifier: N) -> Result<Self, ConfigError> {
        let endpoints = EndpointTable::load()?;

        tracing::debug!(
            mode = ?config.mode,
            base_url = %config.base_url,
            "Data access client configured"
        );

        Ok(Self {
            config,
            endpoints,
            transport,
            fixtures,
            notifier,
        })
    }

    /// Fetch structured data for an endpoint
    ///
    /// In test mode the `fallback_file` is read from the fixture root and
    /// `endpoint`/`options` are ignored; an empty `fallback_file` fails without
    /// any read. In production mode `options` are sent to `base_url + endpoint`.
    ///
    /// # Arguments
    /// - `endpoint` (`&str`): Path and query string appended to the base URL
    /// - `fallback_file` (`&str`): Fixture file used in test mode
    /// - `options` ([`RequestOptions`]): Method, headers and body of the live request
    ///
    /// # Returns
    /// - `R`: The parsed response or fixture
    /// - [`ApiError`]: Configuration, API or unexpected error, already shown to the user
    pub async fn fetch_data<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        fallback_file: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let result = self.fetch(endpoint, fallback_file, options).await;

        self.surface(endpoint, result)
    }

    /// Fetch the data of a named operation from the endpoint table
    pub async fn call<R: DeserializeOwned>(
        &self,
        operation: Operation,
        args: &EndpointArgs<'_>,
    ) -> Result<R, ApiError> {
        let spec = self.endpoints.get(operation);

        let request = spec
            .render(args)
            .and_then(|endpoint| spec.options(args).map(|options| (endpoint, options)));
        let (endpoint, options) = match request {
            Ok(request) => request,
            Err(err) => return self.surface(spec.path, Err(err)),
        };

        self.fetch_data(&endpoint, spec.fixture, options).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        fallback_file: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        match self.config.mode {
            Mode::Test => {
                if fallback_file.is_empty() {
                    return Err(ApiError::MissingFixture {
                        endpoint: endpoint.to_string(),
                    });
                }

                tracing::debug!(
                    endpoint = %endpoint,
                    method = options.method.as_str(),
                    fixture = %fallback_file,
                    "Serving request from fixture"
                );

                let data = self.fixtures.read(fallback_file).await?;

                Ok(serde_json::from_slice(&data)?)
            }
            Mode::Production => {
                let request = HttpRequest {
                    url: self.config.url_for(endpoint),
                    options,
                };
                let response = self.transport.send(request).await?;

                if !response.is_success() {
                    return Err(ApiError::Status {
                        status: response.status,
                        status_text: response.status_text,
                    });
                }

                Ok(serde_json::from_slice(&response.body)?)
            }
        }
    }

    /// Log and notify an error exactly once before handing it back
    fn surface<R>(&self, endpoint: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(err) = &result {
            tracing::error!(
                endpoint = %endpoint,
                kind = ?err.kind(),
                "{}",
                err
            );

            self.notifier.notify(&err.to_string(), ToastKind::Error);
        }

        result
    }
}
