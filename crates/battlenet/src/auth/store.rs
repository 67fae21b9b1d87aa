use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::HttpError;
use crate::region::ApiType;
use crate::request::Authorization;

/// OAuth access token
///
/// Expiry is not tracked locally; a 401 from the server means the token is no
/// longer valid.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw bearer string
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Which of the two stored tokens an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// App-level token for game data calls
    Client,
    /// User-level token for profile calls
    User,
}

#[derive(Default)]
struct StoreInner {
    client_token: Option<AccessToken>,
    user_token: Option<AccessToken>,
    api_key: Option<String>,
    pending_state: Option<String>,
}

/// In-memory credential store
///
/// Cloning shares the underlying state, so a client and its authenticator see
/// the same tokens. Writes are serialized by the lock; concurrent token
/// acquisitions resolve last-writer-wins.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl CredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_token(&self, kind: TokenKind, token: AccessToken) {
        let mut guard = self.inner.write().await;
        match kind {
            TokenKind::Client => guard.client_token = Some(token),
            TokenKind::User => guard.user_token = Some(token),
        }
    }

    pub async fn token(&self, kind: TokenKind) -> Option<AccessToken> {
        let guard = self.inner.read().await;
        match kind {
            TokenKind::Client => guard.client_token.clone(),
            TokenKind::User => guard.user_token.clone(),
        }
    }

    pub async fn set_client_token(&self, token: AccessToken) {
        self.set_token(TokenKind::Client, token).await;
    }

    pub async fn client_token(&self) -> Option<AccessToken> {
        self.token(TokenKind::Client).await
    }

    pub async fn set_user_token(&self, token: AccessToken) {
        self.set_token(TokenKind::User, token).await;
    }

    pub async fn user_token(&self) -> Option<AccessToken> {
        self.token(TokenKind::User).await
    }

    /// Sets the API key for legacy community calls
    pub async fn set_api_key(&self, api_key: String) {
        self.inner.write().await.api_key = Some(api_key);
    }

    pub async fn api_key(&self) -> Option<String> {
        self.inner.read().await.api_key.clone()
    }

    /// Remembers the anti-forgery state sent with an authorize URL
    pub async fn set_pending_state(&self, state: String) {
        self.inner.write().await.pending_state = Some(state);
    }

    pub async fn pending_state(&self) -> Option<String> {
        self.inner.read().await.pending_state.clone()
    }

    /// Consumes the pending state if it equals `state`
    ///
    /// A mismatch leaves the pending state in place.
    pub async fn consume_state(&self, state: &str) -> bool {
        let mut guard = self.inner.write().await;
        match guard.pending_state.as_deref() {
            Some(pending) if pending == state => {
                guard.pending_state = None;
                true
            }
            _ => false,
        }
    }

    /// Resolves the Authorization for an endpoint's API type
    ///
    /// Game data and profile calls fail fast when their token has not been
    /// acquired. Community calls never carry an Authorization header.
    pub async fn authorization_for(&self, api_type: ApiType) -> Result<Authorization, HttpError> {
        match api_type {
            ApiType::GameData => self
                .client_token()
                .await
                .map(Authorization::Bearer)
                .ok_or_else(|| {
                    HttpError::unauthorized(
                        "No client access token; request one with get_client_access_token",
                    )
                }),
            ApiType::Profile => self
                .user_token()
                .await
                .map(Authorization::Bearer)
                .ok_or_else(|| {
                    HttpError::unauthorized(
                        "No user access token; complete the OAuth login first",
                    )
                }),
            ApiType::Community => Ok(Authorization::None),
        }
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("abc123");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
        assert_eq!(token.secret(), "abc123");
    }

    #[test]
    fn access_token_serializes_transparently() {
        let token = AccessToken::new("abc");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc\"");
    }

    #[tokio::test]
    async fn store_starts_empty() {
        let store = CredentialStore::new();

        assert!(store.client_token().await.is_none());
        assert!(store.user_token().await.is_none());
        assert!(store.api_key().await.is_none());
        assert!(store.pending_state().await.is_none());
    }

    #[tokio::test]
    async fn tokens_are_stored_independently() {
        let store = CredentialStore::new();

        store.set_client_token(AccessToken::new("client")).await;
        assert_eq!(store.client_token().await, Some(AccessToken::new("client")));
        assert!(store.user_token().await.is_none());

        store.set_user_token(AccessToken::new("user")).await;
        assert_eq!(store.user_token().await, Some(AccessToken::new("user")));
        assert_eq!(store.client_token().await, Some(AccessToken::new("client")));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = CredentialStore::new();
        let other = store.clone();

        other.set_client_token(AccessToken::new("shared")).await;

        assert_eq!(store.client_token().await, Some(AccessToken::new("shared")));
    }

    #[tokio::test]
    async fn game_data_without_token_fails_fast() {
        let store = CredentialStore::new();

        let err = store.authorization_for(ApiType::GameData).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.code(), None);
    }

    #[tokio::test]
    async fn profile_uses_user_token() {
        let store = CredentialStore::new();
        store.set_client_token(AccessToken::new("client")).await;

        assert!(store.authorization_for(ApiType::Profile).await.is_err());

        store.set_user_token(AccessToken::new("user")).await;
        let auth = store.authorization_for(ApiType::Profile).await.unwrap();

        assert_eq!(auth, Authorization::Bearer(AccessToken::new("user")));
    }

    #[tokio::test]
    async fn community_needs_no_token() {
        let store = CredentialStore::new();
        let auth = store.authorization_for(ApiType::Community).await.unwrap();
        assert_eq!(auth, Authorization::None);
    }

    #[tokio::test]
    async fn consume_state_only_on_match() {
        let store = CredentialStore::new();
        store.set_pending_state("expected".to_string()).await;

        assert!(!store.consume_state("forged").await);
        assert_eq!(store.pending_state().await.as_deref(), Some("expected"));

        assert!(store.consume_state("expected").await);
        assert!(store.pending_state().await.is_none());

        // Already consumed
        assert!(!store.consume_state("expected").await);
    }
}
