//! Request building
//!
//! Turns a host, a path, query parameters and a resolved credential into a
//! fully-qualified [`ApiRequest`] that any [`HttpClient`](crate::http::HttpClient)
//! can send.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use std::fmt;
use url::Url;

use crate::auth::AccessToken;
use crate::error::HttpError;
use crate::region::{Locale, NAMESPACE_HEADER};

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// Credential attached to an outgoing request
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Authorization: Bearer <token>`
    Bearer(AccessToken),
    /// `Authorization: Basic base64(client_id:client_secret)`
    Basic {
        client_id: String,
        client_secret: String,
    },
    /// No Authorization header
    None,
}

impl Authorization {
    pub fn basic(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::Basic {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    fn header_value(&self) -> Option<String> {
        match self {
            Self::Bearer(token) => Some(format!("Bearer {}", token.secret())),
            Self::Basic {
                client_id,
                client_secret,
            } => {
                let digest = STANDARD.encode(format!("{client_id}:{client_secret}"));
                Some(format!("Basic {digest}"))
            }
            Self::None => None,
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(..)"),
            Self::Basic { client_id, .. } => write!(f, "Basic({client_id}:..)"),
            Self::None => f.write_str("None"),
        }
    }
}

/// A fully-qualified request, ready to send
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Returns a header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the first value of a query parameter
    pub fn query(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Builder for [`ApiRequest`]
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    locale: Option<Locale>,
    queries: Vec<(String, String)>,
    namespace: Option<String>,
    authorization: Authorization,
    content_type: &'static str,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Starts a request for `url`, which is `{host}{basePath}{path}`
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            locale: None,
            queries: Vec::new(),
            namespace: None,
            authorization: Authorization::None,
            content_type: JSON,
            body: None,
        }
    }

    /// Appends `locale=<code>` ahead of every other query parameter
    pub fn locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.push((name.into(), value.into()));
        self
    }

    pub fn queries<I, K, V>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.queries
            .extend(queries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the namespace header value, e.g. `dynamic-us`
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = authorization;
        self
    }

    /// Sends `pairs` as an `application/x-www-form-urlencoded` body
    pub fn form_body<'a, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        self.content_type = FORM;
        self.body = Some(encoded.into_bytes());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<ApiRequest, HttpError> {
        let mut url = Url::parse(&self.url)
            .map_err(|e| HttpError::malformed_request(format!("Invalid URL {}: {e}", self.url)))?;

        let mut params: Vec<(String, String)> = Vec::with_capacity(self.queries.len() + 1);
        if let Some(locale) = self.locale {
            params.push(("locale".to_string(), locale.code().to_string()));
        }
        params.extend(self.queries);

        // query_pairs_mut always leaves a `?`, even with nothing appended
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        if let Some(namespace) = self.namespace {
            headers.insert(
                HeaderName::from_static("battlenet-namespace"),
                header_value(NAMESPACE_HEADER, &namespace)?,
            );
        }

        if let Some(value) = self.authorization.header_value() {
            let mut value = header_value("Authorization", &value)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(ApiRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value)
        .map_err(|e| HttpError::malformed_request(format!("Invalid {name} header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn builds_url_without_query_when_no_parameters() {
        let request = RequestBuilder::new(
            Method::GET,
            "https://us.api.blizzard.com/data/wow/connected-realm/index",
        )
        .build()
        .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://us.api.blizzard.com/data/wow/connected-realm/index"
        );
        assert!(request.query("locale").is_none());
    }

    #[test]
    fn locale_comes_before_endpoint_queries() {
        let request = RequestBuilder::new(Method::GET, "https://us.api.blizzard.com/wow/pet/stats/258")
            .locale(Some(Locale::EnUs))
            .query("level", "25")
            .query("breedId", "5")
            .build()
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://us.api.blizzard.com/wow/pet/stats/258?locale=en_US&level=25&breedId=5"
        );
    }

    #[test]
    fn sets_json_headers() {
        let request = RequestBuilder::new(Method::GET, "https://eu.api.blizzard.com/data/wow/mount/index")
            .build()
            .unwrap();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.header("Authorization").is_none());
    }

    #[test]
    fn sets_namespace_header() {
        let request = RequestBuilder::new(Method::GET, "https://us.api.blizzard.com/data/wow/token/index")
            .namespace(Some("dynamic-us".to_string()))
            .build()
            .unwrap();

        assert_eq!(request.header("Battlenet-Namespace"), Some("dynamic-us"));
    }

    #[test]
    fn bearer_authorization() {
        let request = RequestBuilder::new(Method::GET, "https://us.api.blizzard.com/profile/user/wow")
            .authorization(Authorization::Bearer(AccessToken::new("user_token")))
            .build()
            .unwrap();

        assert_eq!(request.header("Authorization"), Some("Bearer user_token"));
    }

    #[test]
    fn basic_authorization_is_base64_of_credentials() {
        let request = RequestBuilder::new(Method::POST, "https://us.battle.net/oauth/token")
            .authorization(Authorization::basic("client", "secret"))
            .build()
            .unwrap();

        // base64("client:secret")
        assert_eq!(
            request.header("Authorization"),
            Some("Basic Y2xpZW50OnNlY3JldA==")
        );
    }

    #[test]
    fn authorization_is_hidden_from_debug_output() {
        let request = RequestBuilder::new(Method::GET, "https://us.api.blizzard.com/profile/user/wow")
            .authorization(Authorization::Bearer(AccessToken::new("user_token")))
            .build()
            .unwrap();

        assert!(request.headers[AUTHORIZATION].is_sensitive());
        assert!(!format!("{request:?}").contains("user_token"));

        let basic = RequestBuilder::new(Method::POST, "https://us.battle.net/oauth/token")
            .authorization(Authorization::basic("client", "secret"))
            .build()
            .unwrap();
        assert!(!format!("{basic:?}").contains("Y2xpZW50OnNlY3JldA=="));
    }

    #[test]
    fn form_body_sets_content_type_and_encodes() {
        let request = RequestBuilder::new(Method::POST, "https://us.battle.net/oauth/token")
            .form_body([("code", "a b"), ("redirect_uri", "https://example.com/cb")])
            .build()
            .unwrap();

        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        let body = String::from_utf8(request.body.unwrap()).unwrap();
        assert_eq!(body, "code=a+b&redirect_uri=https%3A%2F%2Fexample.com%2Fcb");
    }

    #[test]
    fn invalid_url_is_malformed_request() {
        let err = RequestBuilder::new(Method::GET, "not a url")
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
    }

    #[test]
    fn invalid_header_is_malformed_request() {
        let err = RequestBuilder::new(Method::GET, "https://us.api.blizzard.com/x")
            .namespace(Some("bad\nvalue".to_string()))
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let auth = Authorization::Bearer(AccessToken::new("very_secret"));
        assert!(!format!("{auth:?}").contains("very_secret"));

        let basic = Authorization::basic("id", "hidden");
        assert!(!format!("{basic:?}").contains("hidden"));
    }
}
