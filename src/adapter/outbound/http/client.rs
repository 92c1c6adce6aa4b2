use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::status::ExpectedStatus;
use crate::error::FetchError;

/// Default client-side timeout for a whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Decoded result of a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    /// The response body decoded as `T`.
    Content(T),
    /// The server answered `204 No Content`; nothing was decoded.
    NoContent,
}

impl<T> Resource<T> {
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Content(value) => Some(value),
            Self::NoContent => None,
        }
    }

    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }
}

/// Stateless JSON client bound to one base URL.
///
/// Holds nothing across calls besides the base URL and the shared transport
/// handle, so clones can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl ResourceClient {
    /// Create a client with the given request timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_connect_timeout(base_url, timeout, timeout)
    }

    /// Create a client with separate request and connect timeouts.
    #[must_use]
    pub fn with_connect_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        let http = HttpClient::builder()
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: base_url.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `GET` a resource and decode it.
    pub async fn get<T>(&self, path: &str, expected: &ExpectedStatus) -> Result<Resource<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        self.fetch::<T, ()>(Method::GET, path, None, expected).await
    }

    /// `GET` a resource that must have a body; `204` is reported as
    /// [`FetchError::MissingContent`].
    pub async fn get_content<T>(&self, path: &str, expected: &ExpectedStatus) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        match self.get(path, expected).await? {
            Resource::Content(value) => Ok(value),
            Resource::NoContent => Err(FetchError::MissingContent {
                method: Method::GET,
                url: self.url_for(path),
            }),
        }
    }

    /// `POST` an optional JSON body and decode the response.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        expected: &ExpectedStatus,
    ) -> Result<Resource<T>, FetchError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(Method::POST, path, body, expected).await
    }

    /// Issue a request and decode the response into `T`.
    ///
    /// The body, if any, is sent as JSON with a `Content-Type` header. The
    /// full response body is read before the status is checked, so a status
    /// mismatch reports what the server said. A `204` that is in `expected`
    /// yields [`Resource::NoContent`] without touching the decoder.
    pub async fn fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &ExpectedStatus,
    ) -> Result<Resource<T>, FetchError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path);

        if expected.is_empty() {
            return Err(FetchError::RequestConstruction {
                method,
                url,
                reason: "expected status set is empty".into(),
            });
        }

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|source| FetchError::Encode {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let mut builder = self
            .http
            .request(method.clone(), url.as_str())
            .timeout(self.timeout);
        if let Some(payload) = payload {
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }
        let request = builder
            .build()
            .map_err(|err| FetchError::RequestConstruction {
                method: method.clone(),
                url: url.clone(),
                reason: err.to_string(),
            })?;

        debug!(method = %method, url = %url, "Sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| FetchError::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        if !expected.contains(status) {
            return Err(FetchError::UnexpectedStatus {
                method,
                url,
                expected: expected.clone(),
                actual: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).trim().to_string(),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Resource::NoContent);
        }

        serde_json::from_slice(&bytes)
            .map(Resource::Content)
            .map_err(|source| FetchError::Decode { method, url, source })
    }

    fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
