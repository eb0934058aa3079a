//! Asana API client.
//!
//! This module provides [`AsanaClient`], the [`Transport`] implementation
//! that resource action methods use by default.

use async_trait::async_trait;
use serde_json::json;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport,
};
use crate::config::AsanaConfig;
use crate::rest::{Options, Params};

/// Client for the Asana REST API.
///
/// Request bodies are wrapped in Asana's `{"data": ...}` envelope and
/// options are sent as `opt_*` query parameters.
///
/// # Thread Safety
///
/// `AsanaClient` is `Send + Sync`. Resource objects borrow it, so it must
/// outlive every object and collection created through it.
///
/// # Example
///
/// ```rust,ignore
/// use asana_api::{AsanaClient, AsanaConfig, AccessToken};
/// use asana_api::rest::{Options, resources::Section};
///
/// let config = AsanaConfig::builder()
///     .access_token(AccessToken::new("1/1234:abcd").unwrap())
///     .build()
///     .unwrap();
/// let client = AsanaClient::new(&config)?;
///
/// let section = Section::find_by_id(&client, "1331", &Options::new()).await?;
/// ```
#[derive(Debug)]
pub struct AsanaClient {
    http_client: HttpClient,
    config: AsanaConfig,
}

// Verify AsanaClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AsanaClient>();
};

impl AsanaClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &AsanaConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(base_url = %config.base_url(), "Created Asana client");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &AsanaConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<&Params>,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path.trim_start_matches('/'))
            .query(query)
            .tries(self.http_client.max_tries());

        for (name, value) in options.headers() {
            builder = builder.header(name, value);
        }

        if let Some(body) = body {
            builder = builder
                .body(json!({ "data": body.to_value() }))
                .body_type(DataType::Json);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

#[async_trait]
impl Transport for AsanaClient {
    async fn get(
        &self,
        path: &str,
        params: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        let mut query = params.to_query();
        query.extend(options.to_query());
        self.send(HttpMethod::Get, path, query, None, options).await
    }

    async fn post(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Post, path, options.to_query(), Some(body), options)
            .await
    }

    async fn put(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Put, path, options.to_query(), Some(body), options)
            .await
    }

    async fn delete(&self, path: &str, options: &Options) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Delete, path, options.to_query(), None, options)
            .await
    }
}
