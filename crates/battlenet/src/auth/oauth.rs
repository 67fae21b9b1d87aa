use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Method;
use url::Url;

use super::store::{CredentialStore, TokenKind};
use crate::decode::DecodeExt;
use crate::error::HttpError;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::auth::{Access, TokenInfo, UserInfo};
use crate::region::{Region, Scope};
use crate::request::{Authorization, RequestBuilder};

/// Length of the anti-forgery `state` sent with an authorize URL
pub const STATE_LENGTH: usize = 32;

/// OAuth handler for Battle.net
///
/// Runs the client-credentials flow for game data, the authorization-code
/// flow for profile data, and token validation. Acquired tokens are written
/// to the shared [`CredentialStore`]; a failed call leaves it untouched.
pub struct Authenticator<H: HttpClient = ReqwestClient> {
    http: H,
    store: CredentialStore,
    client_id: String,
    client_secret: String,
    region: Region,
}

impl Authenticator<ReqwestClient> {
    /// Creates an authenticator with the default HTTP implementation
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        region: Region,
        store: CredentialStore,
    ) -> Self {
        Self::with_http_client(ReqwestClient::new(), client_id, client_secret, region, store)
    }
}

impl<H: HttpClient> Authenticator<H> {
    /// Creates an authenticator with a custom HTTP client (for testing)
    pub fn with_http_client(
        http: H,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        region: Region,
        store: CredentialStore,
    ) -> Self {
        Self {
            http,
            store,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            region,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Requests an app-level token with the client credentials grant
    ///
    /// On success the token is stored as the client token.
    pub async fn get_client_access_token(&self) -> Result<Access, HttpError> {
        let request = RequestBuilder::new(Method::POST, self.region.token_uri())
            .query("grant_type", "client_credentials")
            .query("client_id", &self.client_id)
            .query("client_secret", &self.client_secret)
            .authorization(Authorization::basic(&self.client_id, &self.client_secret))
            .build()?;

        let access = decode_access(self.http.send(&request).await?.into_result())?;
        self.store.set_client_token(access.access_token.clone()).await;

        tracing::info!("Client access token acquired for {}", self.region);
        Ok(access)
    }

    /// Builds the URL the user opens to grant access
    ///
    /// A fresh random `state` is generated and remembered until a redirect
    /// carrying it is accepted by [`parse_redirect`](Self::parse_redirect).
    pub async fn authorize_url(
        &self,
        scopes: &[Scope],
        redirect_uri: &str,
    ) -> Result<Url, HttpError> {
        let state = generate_state();

        let request = RequestBuilder::new(Method::GET, self.region.authorize_uri())
            .query("client_id", &self.client_id)
            .query("scope", Scope::join(scopes))
            .query("state", &state)
            .query("redirect_uri", redirect_uri)
            .query("response_type", "code")
            .build()?;

        self.store.set_pending_state(state).await;
        Ok(request.url)
    }

    /// Validates an OAuth redirect and returns its authorization code
    ///
    /// The callback must carry the pending `state`; anything else is
    /// rejected with `Forbidden` and the pending state is kept.
    pub async fn parse_redirect(&self, callback_url: &str) -> Result<String, HttpError> {
        let url = Url::parse(callback_url).map_err(|e| {
            HttpError::malformed_request(format!("Invalid callback URL {callback_url}: {e}"))
        })?;

        let param = |name: &str| {
            url.query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };

        if let Some(error) = param("error") {
            let detail = param("error_description").unwrap_or_default();
            tracing::warn!("Authorization denied: {} {}", error, detail);
            return Err(HttpError::forbidden(format!(
                "Authorization denied: {error} {detail}"
            )));
        }

        let code = param("code")
            .ok_or_else(|| HttpError::malformed_request("Callback URL has no code parameter"))?;
        let state = param("state")
            .ok_or_else(|| HttpError::malformed_request("Callback URL has no state parameter"))?;

        if !self.store.consume_state(&state).await {
            tracing::warn!("Rejected OAuth callback with unexpected state");
            return Err(HttpError::forbidden(
                "OAuth state does not match the pending authorization request",
            ));
        }

        Ok(code)
    }

    /// Exchanges an authorization code for a user token
    ///
    /// On success the token is stored as the user token.
    pub async fn get_user_access_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Access, HttpError> {
        let request = RequestBuilder::new(Method::POST, self.region.token_uri())
            .form_body([
                ("grant_type", "authorization_code"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .build()?;

        let access = decode_access(self.http.send(&request).await?.into_result())?;
        self.store.set_user_token(access.access_token.clone()).await;

        tracing::info!("User access token acquired for {}", self.region);
        Ok(access)
    }

    /// Validates a redirect and exchanges its code in one step
    ///
    /// A rejected callback performs no network call.
    pub async fn complete_authorization(
        &self,
        callback_url: &str,
        redirect_uri: &str,
    ) -> Result<Access, HttpError> {
        let code = self.parse_redirect(callback_url).await?;
        self.get_user_access_token(&code, redirect_uri).await
    }

    pub async fn validate_client_access_token(&self) -> Result<TokenInfo, HttpError> {
        self.validate(TokenKind::Client).await
    }

    pub async fn validate_user_access_token(&self) -> Result<TokenInfo, HttpError> {
        self.validate(TokenKind::User).await
    }

    /// Checks a stored token against the server
    ///
    /// Any 2xx re-stores the same token, even when the body then fails to
    /// decode as `TokenInfo`.
    async fn validate(&self, kind: TokenKind) -> Result<TokenInfo, HttpError> {
        let token = self.store.token(kind).await.ok_or_else(|| {
            HttpError::unauthorized(format!("No {kind:?} access token to validate"))
        })?;

        let request = RequestBuilder::new(Method::POST, self.region.check_token_uri())
            .query("token", token.secret())
            .build()?;

        let body = self.http.send(&request).await?.into_result()?;
        self.store.set_token(kind, token).await;

        tracing::debug!("{:?} access token is valid", kind);
        Ok::<_, HttpError>(body).decode()
    }

    /// Fetches the account behind the user token
    pub async fn get_user_info(&self) -> Result<UserInfo, HttpError> {
        let token = self.store.user_token().await.ok_or_else(|| {
            HttpError::unauthorized("No user access token; complete the OAuth login first")
        })?;

        let request = RequestBuilder::new(Method::GET, self.region.user_info_uri())
            .authorization(Authorization::Bearer(token))
            .build()?;

        self.http.send(&request).await?.into_result().decode()
    }

    /// Sets the API key appended to legacy community calls
    #[deprecated(note = "community APIs are retired; use game data endpoints")]
    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        self.store.set_api_key(api_key.into()).await;
    }
}

impl<H: HttpClient + Clone> Authenticator<H> {
    /// Returns an authenticator for another region sharing the same store
    pub fn for_region(&self, region: Region) -> Self {
        Self {
            region,
            ..self.clone()
        }
    }
}

impl<H: HttpClient + Clone> Clone for Authenticator<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            store: self.store.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            region: self.region,
        }
    }
}

fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Decodes a token response
///
/// Valid JSON that is not an object is an unexpected shape; an object
/// without `access_token` fails deserialization.
fn decode_access(result: Result<Vec<u8>, HttpError>) -> Result<Access, HttpError> {
    let value: serde_json::Value = result.decode()?;
    if !value.is_object() {
        return Err(HttpError::unexpected_response(
            "Token response is not a JSON object",
        ));
    }
    Ok(serde_json::from_value(value)?)
}
