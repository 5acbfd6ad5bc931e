//! Request builder.

use crate::{HttpError, HttpTransport, Response, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::time::Duration;

/// HTTP request builder.
///
/// Errors found while building (bad header, unserializable body) are held
/// back and returned from [`RequestBuilder::send`].
pub struct RequestBuilder<'a> {
    transport: &'a HttpTransport,
    method: Method,
    url: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    error: Option<HttpError>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(transport: &'a HttpTransport, method: Method, url: String) -> Self {
        Self {
            transport,
            method,
            url,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
            error: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        match (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => {
                self.error.get_or_insert(HttpError::RequestBuild(format!(
                    "invalid header: {}",
                    name.as_ref()
                )));
            }
        }
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        match serde_json::to_vec(json) {
            Ok(bytes) => {
                self.headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.body = Some(bytes);
            }
            Err(e) => {
                self.error
                    .get_or_insert(HttpError::RequestBuild(format!("JSON body: {}", e)));
            }
        }
        self
    }

    /// Override the transport timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the URL against the configured base and append the query.
    pub(crate) fn build_url(&self) -> Result<url::Url> {
        let mut url = match &self.transport.config().base_url {
            Some(base) => {
                let base =
                    url::Url::parse(base).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
                base.join(&self.url)
                    .map_err(|e| HttpError::InvalidUrl(e.to_string()))?
            }
            None => url::Url::parse(&self.url).map_err(|e| HttpError::InvalidUrl(e.to_string()))?,
        };

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let url = self.build_url()?;
        let mut request = self.transport.inner().request(self.method, url);

        for (name, value) in &self.transport.config().default_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = request.headers(self.headers);

        if let Some(body) = self.body {
            request = request.body(body);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        self.transport.dispatch(request.build()?).await
    }
}
