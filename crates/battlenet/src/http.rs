//! HTTP transport for Battle.net calls
//!
//! This module provides a trait-based HTTP client that can be easily mocked for testing,
//! and the status classification shared by every call.

use async_trait::async_trait;

use crate::error::HttpError;
use crate::request::ApiRequest;

/// Trait for sending requests
///
/// Implementations send exactly one request and report either the raw
/// response or a transport-level failure. No retries.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HttpError>;
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if status is 401
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns true if status is 403
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Classifies the response: 2xx yields the body, anything else an error
    pub fn into_result(self) -> Result<Vec<u8>, HttpError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            let body = String::from_utf8_lossy(&self.body);
            Err(HttpError::from_status(self.status, &body))
        }
    }
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .inner
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::error::ErrorKind;
    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    /// Mock HTTP client for testing
    ///
    /// Allows setting up canned responses for specific method and URL pairs.
    #[derive(Debug, Clone, Default)]
    pub struct MockHttpClient {
        responses: Arc<RwLock<HashMap<(Method, String), MockResponse>>>,
        requests: Arc<RwLock<Vec<RecordedRequest>>>,
    }

    /// A recorded HTTP request
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub url: String,
        pub headers: HeaderMap,
        pub body: Option<Vec<u8>>,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).and_then(|v| v.to_str().ok())
        }

        pub fn body_text(&self) -> String {
            self.body
                .as_deref()
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .unwrap_or_default()
        }
    }

    /// A mock response configuration
    #[derive(Debug, Clone)]
    enum MockResponse {
        Reply { status: u16, body: String },
        Offline,
    }

    impl MockHttpClient {
        /// Creates a new mock client
        pub fn new() -> Self {
            Self::default()
        }

        fn on(self, method: Method, url: &str, response: MockResponse) -> Self {
            self.responses
                .write()
                .unwrap()
                .insert((method, url.to_string()), response);
            self
        }

        /// Configures a GET response for a URL
        pub fn on_get(self, url: &str, status: u16, body: impl Into<String>) -> Self {
            self.on(
                Method::GET,
                url,
                MockResponse::Reply {
                    status,
                    body: body.into(),
                },
            )
        }

        /// Configures a POST response for a URL
        pub fn on_post(self, url: &str, status: u16, body: impl Into<String>) -> Self {
            self.on(
                Method::POST,
                url,
                MockResponse::Reply {
                    status,
                    body: body.into(),
                },
            )
        }

        /// Configures a successful JSON response for a GET
        pub fn on_get_json<T: serde::Serialize>(self, url: &str, data: &T) -> Self {
            let body = serde_json::to_string(data).expect("Failed to serialize mock data");
            self.on_get(url, 200, body)
        }

        /// Makes a GET to `url` fail as if the network were down
        pub fn on_get_offline(self, url: &str) -> Self {
            self.on(Method::GET, url, MockResponse::Offline)
        }

        /// Returns all recorded requests
        pub fn get_requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().unwrap().clone()
        }

        /// Returns the number of requests made
        pub fn request_count(&self) -> usize {
            self.requests.read().unwrap().len()
        }

        /// Clears all recorded requests
        pub fn clear_requests(&self) {
            self.requests.write().unwrap().clear();
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HttpError> {
            // Record the request
            self.requests.write().unwrap().push(RecordedRequest {
                method: request.method.clone(),
                url: request.url.to_string(),
                headers: request.headers.clone(),
                body: request.body.clone(),
            });

            // Find matching response
            let responses = self.responses.read().unwrap();
            let key = (request.method.clone(), request.url.to_string());

            match responses.get(&key) {
                Some(MockResponse::Reply { status, body }) => Ok(HttpResponse {
                    status: *status,
                    body: body.clone().into_bytes(),
                }),
                Some(MockResponse::Offline) => Err(HttpError::from_kind(ErrorKind::NoNetwork)),
                None => Err(HttpError::new(
                    ErrorKind::ServerError,
                    None,
                    format!("No mock response configured for {} {}", key.0, key.1),
                )),
            }
        }
    }
}
