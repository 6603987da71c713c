use std::sync::Arc;
use std::time::Duration;

use flm_core::{RequestInterceptor, ResponseInterceptor, TransportError};
use reqwest::{
    Client, RequestBuilder, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::field::Empty;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// HTTP transport shared by every API caller of one client.
///
/// Interceptors are fixed when the client is built: request interceptors
/// run in order before each request is sent, response interceptors see the
/// status of every response that comes back.
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded `segments` to the base address, keeping its
    /// path (`http://host/api` + `["auth", "login"]` is `http://host/api/auth/login`).
    pub fn url(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TransportError::Local(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get<T>(&self, segments: &[&str]) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        self.execute(self.http_client.get(url)).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        self.execute(self.http_client.post(url).json(body)).await
    }

    /// `POST` without a request body.
    pub async fn post_empty<T>(&self, segments: &[&str]) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        self.execute(self.http_client.post(url)).await
    }

    #[tracing::instrument(name = "ApiClient::execute", skip_all, fields(method = Empty, url = Empty))]
    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let mut request = request.build().map_err(classify)?;
        let span = tracing::Span::current();
        span.record("method", request.method().as_str());
        span.record("url", request.url().as_str());

        for interceptor in &self.request_interceptors {
            interceptor.intercept_request(request.headers_mut()).await?;
        }

        let response = self.http_client.execute(request).await.map_err(classify)?;
        let status = response.status();
        tracing::debug!(%status, "Response received");

        for interceptor in &self.response_interceptors {
            interceptor.intercept_response(status).await;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Responded { status, body });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(body)
            .map_err(|e| TransportError::Local(format!("Unexpected response body: {}", e)))
    }
}

/// Sorts a reqwest failure into the three transport failure classes.
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::Local(error.to_string())
    } else if error.is_connect() || error.is_timeout() || error.is_request() {
        TransportError::NoResponse(error.to_string())
    } else {
        TransportError::Local(error.to_string())
    }
}

pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn request_interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: RequestInterceptor + 'static,
    {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn response_interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: ResponseInterceptor + 'static,
    {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| ApiClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBaseUrl {
                url: self.base_url,
                reason: "cannot be a base".to_string(),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut http_client = Client::builder()
            .default_headers(default_headers)
            .cookie_store(true);
        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }

        Ok(ApiClient {
            http_client: http_client.build()?,
            base_url,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}
