//! reqwest wrapper used for WSDL fetches and SOAP posts.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serviceclients_domain::{ClientError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// `User-Agent` sent by [`HttpClient::new`].
pub const DEFAULT_USER_AGENT: &str = concat!("serviceclients/", env!("CARGO_PKG_VERSION"));

/// HTTP client used by the SOAP transport.
///
/// Each call is a single attempt; failures are reported to the caller as-is.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().user_agent(DEFAULT_USER_AGENT).build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(|err| ClientError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    /// GET `url` and return the body, failing on non-success status.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send(self.request(Method::GET, url)).await?;
        let response =
            response.error_for_status().map_err(|err| ClientError::from(InfraError::from(err)))?;
        response.text().await.map_err(|err| InfraError::from(err).into())
    }

    /// POST a SOAP 1.1 envelope and return status and body.
    ///
    /// Non-success statuses are returned, not raised: SOAP faults arrive with
    /// HTTP 500 and are decoded by the caller.
    pub async fn post_soap(&self, url: &str, action: &str, envelope: String) -> Result<(u16, String)> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"));
        let action = HeaderValue::from_str(&format!("\"{}\"", action))
            .map_err(|err| ClientError::Protocol(format!("invalid SOAPAction: {}", err)))?;
        headers.insert("SOAPAction", action);

        let builder = self.request(Method::POST, url).headers(headers).body(envelope);
        let response = self.send(builder).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| ClientError::from(InfraError::from(err)))?;
        Ok((status, body))
    }
}

/// Builder for [`HttpClient`].
///
/// Proxy settings from the environment (`HTTPS_PROXY`, `NO_PROXY`, ...) are
/// honoured unless [`HttpClientBuilder::no_proxy`] is called.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    bypass_proxy: bool,
}

impl HttpClientBuilder {
    /// Overall request timeout. Unset by default: calls wait for the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Value of the `User-Agent` header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Ignore proxy settings and connect directly.
    pub fn no_proxy(mut self) -> Self {
        self.bypass_proxy = true;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder();

        if self.bypass_proxy {
            builder = builder.no_proxy();
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| ClientError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
