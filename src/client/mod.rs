//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::{
    Action, ApiKey, Balance, CancelResult, Endpoint, IdBatch, Identifier, NewOrder, OrderCreated,
    RefillReport, RefillStatusReport, Service, StatusReport, ValidationError,
};
use crate::transport::{Params, TransportError};

const JSON_MIME: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(ACCEPT, JSON_MIME)
                .header(CONTENT_TYPE, JSON_MIME)
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ProviderClient`].
///
/// Local failures (`Configuration`, `InvalidAction`, `BatchLimitExceeded`,
/// `Validation`) are raised before any request is sent. Provider failures
/// (`InvalidApiKey`, `InvalidRequest`, `Provider`) carry the message from the
/// provider's `{"error": ...}` body. `Transport` wraps the HTTP client failure
/// as-is.
///
/// Per-item failures inside a successful batch response are not errors; see
/// [`crate::ItemOutcome`].
pub enum SmmError {
    /// Endpoint, API key, or HTTP client options rejected at construction.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// Action string outside the known set reached the request primitive.
    #[error("invalid action: {0:?}")]
    InvalidAction(String),

    /// More identifiers than a batch-capable action accepts.
    #[error("batch limit exceeded: {actual} identifiers (max {max})")]
    BatchLimitExceeded { max: usize, actual: usize },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[source] ValidationError),

    /// Provider answered HTTP 401.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// Provider answered HTTP 404.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider answered with any other failure.
    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Successful response body could not be parsed as the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

impl SmmError {
    /// `true` for errors reported by the provider over HTTP.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey(_) | Self::InvalidRequest(_) | Self::Provider { .. }
        )
    }

    /// `true` for errors raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::InvalidAction(_)
                | Self::BatchLimitExceeded { .. }
                | Self::Validation(_)
        )
    }

    fn from_http_status(status: u16, body: &str) -> Self {
        let message = crate::transport::error_message_or_default(body);
        match status {
            401 => Self::InvalidApiKey(message),
            404 => Self::InvalidRequest(message),
            _ => Self::Provider { status, message },
        }
    }
}

impl From<ValidationError> for SmmError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::BatchLimitExceeded { max, actual } => {
                Self::BatchLimitExceeded { max, actual }
            }
            other => Self::Validation(other),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ProviderClient`].
///
/// Use this when you need a request timeout or a custom user-agent. Without a
/// timeout a hung request waits until the caller gives up.
pub struct ProviderClientBuilder {
    endpoint: String,
    api_key: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ProviderClientBuilder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and build a [`ProviderClient`].
    ///
    /// No network activity happens here.
    pub fn build(self) -> Result<ProviderClient, SmmError> {
        let endpoint = Endpoint::new(self.endpoint).map_err(SmmError::Configuration)?;
        let key = ApiKey::new(self.api_key).map_err(SmmError::Configuration)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| {
                SmmError::Configuration(ValidationError::HttpClient {
                    reason: err.to_string(),
                })
            })?;

        Ok(ProviderClient {
            endpoint,
            key,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for one SMM provider speaking the v2 action protocol.
///
/// Every call is a single `POST` of `{ key, action, ... }` as JSON to the
/// configured endpoint. The client holds no mutable state, so clones and
/// concurrent calls are independent. Nothing is retried.
pub struct ProviderClient {
    endpoint: Endpoint,
    key: ApiKey,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClient")
            .field("endpoint", &self.endpoint)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ProviderClient {
    /// Create a client for `endpoint` authenticated with `api_key`.
    ///
    /// Returns [`SmmError::Configuration`] if either value is empty or the
    /// endpoint is not an absolute URL.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, SmmError> {
        ProviderClientBuilder::new(endpoint, api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ProviderClientBuilder {
        ProviderClientBuilder::new(endpoint, api_key)
    }

    /// The endpoint every request is posted to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Send a raw action and parse the successful body as `T`.
    ///
    /// `action` must be one of the seven known actions; anything else fails
    /// with [`SmmError::InvalidAction`] before a request is sent. Fields in
    /// `extra` are merged after `key` and `action`, so a colliding name
    /// replaces the mandatory value.
    pub async fn post<T>(&self, action: &str, extra: Params) -> Result<T, SmmError>
    where
        T: DeserializeOwned,
    {
        let action = action
            .parse::<Action>()
            .map_err(|err| SmmError::InvalidAction(err.0))?;
        let response = self.dispatch(action, extra).await?;
        decode(&response, |body| {
            serde_json::from_str::<T>(body).map_err(TransportError::from)
        })
    }

    /// Current account balance.
    pub async fn balance(&self) -> Result<Balance, SmmError> {
        let response = self.dispatch(Action::Balance, Params::new()).await?;
        decode(&response, crate::transport::decode_balance_json_response)
    }

    /// Place a new order (`action=add`).
    pub async fn order(&self, order: &NewOrder) -> Result<OrderCreated, SmmError> {
        let params = crate::transport::encode_order_params(order);
        let response = self.dispatch(Action::Add, params).await?;
        decode(&response, crate::transport::decode_order_json_response)
    }

    /// All services offered by the provider.
    pub async fn services(&self) -> Result<Vec<Service>, SmmError> {
        let response = self.dispatch(Action::Services, Params::new()).await?;
        decode(&response, crate::transport::decode_services_json_response)
    }

    /// Status of up to 100 orders.
    ///
    /// One id yields [`StatusReport::Single`]; several yield
    /// [`StatusReport::Batch`] keyed by order id.
    pub async fn status<I>(&self, orders: I) -> Result<StatusReport, SmmError>
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        let request = id_batch(orders)?;
        let params = crate::transport::encode_status_params(&request);
        let response = self.dispatch(Action::Status, params).await?;
        decode(&response, |body| {
            crate::transport::decode_status_json_response(&request, body)
        })
    }

    /// Request a refill for up to 100 orders.
    pub async fn refill<I>(&self, orders: I) -> Result<RefillReport, SmmError>
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        let request = id_batch(orders)?;
        let params = crate::transport::encode_refill_params(&request);
        let response = self.dispatch(Action::Refill, params).await?;
        decode(&response, |body| {
            crate::transport::decode_refill_json_response(&request, body)
        })
    }

    /// Status of up to 100 refills.
    pub async fn refill_status<I>(&self, refills: I) -> Result<RefillStatusReport, SmmError>
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        let request = id_batch(refills)?;
        let params = crate::transport::encode_refill_status_params(&request);
        let response = self.dispatch(Action::RefillStatus, params).await?;
        decode(&response, |body| {
            crate::transport::decode_refill_status_json_response(&request, body)
        })
    }

    /// Cancel up to 100 orders.
    ///
    /// Unlike the other batch actions, the provider answers with one entry per
    /// order even when a single id is given.
    pub async fn cancel<I>(&self, orders: I) -> Result<Vec<CancelResult>, SmmError>
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        let request = id_batch(orders)?;
        let params = crate::transport::encode_cancel_params(&request);
        let response = self.dispatch(Action::Cancel, params).await?;
        decode(&response, crate::transport::decode_cancel_json_response)
    }

    #[instrument(skip_all, fields(action = %action, endpoint = %self.endpoint.as_str()))]
    async fn dispatch(&self, action: Action, extra: Params) -> Result<HttpResponse, SmmError> {
        let body = crate::transport::encode_envelope(&self.key, action, extra);
        debug!("sending provider request");

        let response = self
            .http
            .post_json(self.endpoint.as_str(), body)
            .await
            .map_err(SmmError::Transport)?;
        debug!(status = response.status, "provider response received");

        if !(200..=299).contains(&response.status) {
            return Err(SmmError::from_http_status(
                response.status,
                &response.body,
            ));
        }

        Ok(response)
    }
}

fn id_batch<I>(ids: I) -> Result<IdBatch, SmmError>
where
    I: IntoIterator,
    I::Item: Into<Identifier>,
{
    let ids = ids.into_iter().map(Into::into).collect::<Vec<Identifier>>();
    Ok(IdBatch::new(ids)?)
}

/// Decode a 2xx body. A body that is not the expected shape but carries a
/// top-level `error` is reported as a provider error.
fn decode<T>(
    response: &HttpResponse,
    decoder: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, SmmError> {
    decoder(response.body.as_str()).map_err(|err| {
        match crate::transport::decode_error_message(&response.body) {
            Some(message) => SmmError::Provider {
                status: response.status,
                message,
            },
            None => SmmError::Parse(Box::new(err)),
        }
    })
}
