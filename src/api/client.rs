/// Blocking HTTP client for the platform's REST API (version 2.0).
use std::time::Instant;

use log::{debug, warn};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use crate::config::{Credentials, DatabricksConfig};

/// Path prefix of every endpoint this client talks to.
const API_PREFIX: &str = "/api/2.0";

const USER_AGENT: &str = concat!("databricks-cli-rs/", env!("CARGO_PKG_VERSION"));

/// Shape of the JSON body the platform sends with error statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_code: Option<String>,
    message: Option<String>,
}

/// Authenticated API client. One per process; requests run sequentially.
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialised.
    pub fn new(config: &DatabricksConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: format!("{}{API_PREFIX}", config.host.trim_end_matches('/')),
            credentials: config.credentials.clone(),
        })
    }

    /// `GET` an endpoint with query parameters and decode the JSON response.
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, endpoint).query(query);
        send(Method::GET, endpoint, request)
    }

    /// `POST` a JSON body to an endpoint and decode the JSON response.
    pub(crate) fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, endpoint).json(body);
        send(Method::POST, endpoint, request)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{endpoint}", self.base_url));
        match &self.credentials {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

/// Execute a request, logging its outcome and timing.
fn send<T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    request: RequestBuilder,
) -> Result<T, ApiError> {
    let start = Instant::now();
    let response = request.send().map_err(|source| ApiError::Transport {
        endpoint: endpoint.to_owned(),
        source,
    })?;
    let status = response.status();
    let text = response.text().map_err(|source| ApiError::Transport {
        endpoint: endpoint.to_owned(),
        source,
    })?;
    debug!(
        "{method} {endpoint} -> {} in {:.1}ms",
        status.as_u16(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if !status.is_success() {
        warn!("{method} {endpoint} failed with {status}");
        return Err(http_error(endpoint, status.as_u16(), status.canonical_reason(), &text));
    }

    decode(endpoint, &text)
}

/// Decode a success body. Some endpoints answer with an empty body instead of `{}`.
fn decode<T: DeserializeOwned>(endpoint: &str, text: &str) -> Result<T, ApiError> {
    let body = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_owned(),
        source,
    })
}

/// Map an error status and its body to `ApiError::Http`, preferring the platform's message.
fn http_error(endpoint: &str, status: u16, reason: Option<&str>, text: &str) -> ApiError {
    let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();
    let message = body
        .message
        .or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .or_else(|| reason.map(str::to_owned))
        .unwrap_or_else(|| "no response body".to_owned());
    ApiError::Http {
        endpoint: endpoint.to_owned(),
        status,
        error_code: body.error_code,
        message,
    }
}
