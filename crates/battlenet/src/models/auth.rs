use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AccessToken;

/// Response from the OAuth token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    pub access_token: AccessToken,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    /// Account id, present on user tokens
    #[serde(default)]
    pub sub: Option<String>,
}

/// Response from the check-token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub client_id: String,
    /// Expiry as a unix timestamp in seconds
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub authorities: Vec<String>,
    /// BattleTag of the user, for user tokens
    #[serde(default)]
    pub user_name: Option<String>,
}

impl TokenInfo {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Checks whether the server-reported expiry has passed
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|at| Utc::now() > at)
    }
}

/// Response from the OAuth user info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub battletag: String,
    #[serde(default)]
    pub sub: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn access_requires_only_access_token() {
        let access: Access = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(access.access_token.secret(), "abc");
        assert!(access.expires_in.is_none());
    }

    #[test]
    fn access_without_token_fails() {
        let result: Result<Access, _> =
            serde_json::from_str(r#"{"token_type": "bearer", "expires_in": 86399}"#);
        assert!(result.is_err());
    }

    #[test]
    fn access_full_response() {
        let access: Access = serde_json::from_str(
            r#"{"access_token": "abc", "token_type": "bearer", "expires_in": 86399, "scope": "wow.profile", "sub": "123"}"#,
        )
        .unwrap();

        assert_eq!(access.token_type.as_deref(), Some("bearer"));
        assert_eq!(access.expires_in, Some(86399));
        assert_eq!(access.sub.as_deref(), Some("123"));
    }

    #[test]
    fn token_info_expiry() {
        let future = Utc::now() + Duration::hours(1);
        let info = TokenInfo {
            client_id: "id".to_string(),
            exp: Some(future.timestamp()),
            scope: vec![],
            authorities: vec![],
            user_name: None,
        };

        assert!(!info.is_expired());
        assert_eq!(info.expires_at().unwrap().timestamp(), future.timestamp());

        let past = TokenInfo {
            exp: Some((Utc::now() - Duration::hours(1)).timestamp()),
            ..info
        };
        assert!(past.is_expired());
    }

    #[test]
    fn token_info_without_exp_is_not_expired() {
        let info: TokenInfo = serde_json::from_str(r#"{"client_id": "abc"}"#).unwrap();
        assert!(!info.is_expired());
    }

    #[test]
    fn token_info_decodes_empty_object() {
        let info: TokenInfo = serde_json::from_str("{}").unwrap();
        assert!(info.client_id.is_empty());
        assert!(info.scope.is_empty());
    }

    #[test]
    fn user_info_decodes() {
        let info: UserInfo =
            serde_json::from_str(r#"{"id": 42, "battletag": "Player#1234", "sub": "42"}"#).unwrap();
        assert_eq!(info.battletag, "Player#1234");
    }
}
