//! BrickFTP API client with request/response handling.

use serde_json::Value;
use tracing::debug;

use super::error::map_response;
use crate::error::Result;
use crate::http::{HttpClient, HttpRequest, Method, Transport};
use crate::session::AuthArtifact;

/// JSON request dispatcher for the BrickFTP REST API.
///
/// Every call goes to `{base_url}{path}`, carries the artifact it is given,
/// and has its response normalized into JSON or a [`BrickError`](crate::BrickError).
#[derive(Debug)]
pub struct ApiClient<T = HttpClient> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    /// `base_url` must end with `/`.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Base URL every path is joined to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport, also used for raw payload exchanges.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path. Leading slashes of `path` are dropped so
    /// `"/a"` and `"a"` resolve identically.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make an API request.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL
    /// * `body` - optional JSON body
    /// * `headers` - extra headers
    /// * `auth` - artifact chosen by the session
    ///
    /// # Returns
    /// Parsed JSON body, object or array
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &[(&str, &str)],
        auth: &AuthArtifact,
    ) -> Result<Value> {
        let mut request = HttpRequest::new(method, self.url_for(path));
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body.to_string().into_bytes());
        }
        let request = auth.apply(request);

        debug!(method = method.as_str(), path, "api request");
        let response = self.transport.execute(request).await?;
        debug!(
            method = method.as_str(),
            path,
            status = response.status,
            bytes = response.body.len(),
            "api response"
        );

        map_response(response)
    }

    /// GET `path`.
    pub async fn get(&self, path: &str, auth: &AuthArtifact) -> Result<Value> {
        self.call(Method::Get, path, None, &[], auth).await
    }

    /// POST `path` with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>, auth: &AuthArtifact) -> Result<Value> {
        self.call(Method::Post, path, body, &[], auth).await
    }

    /// DELETE `path` with extra headers.
    pub async fn delete(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        auth: &AuthArtifact,
    ) -> Result<Value> {
        self.call(Method::Delete, path, None, headers, auth).await
    }
}
