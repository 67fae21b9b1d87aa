//! Common test utilities for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use battlenet::http::{HttpClient, HttpResponse};
use battlenet::request::ApiRequest;
use battlenet::{BattleNetClient, ClientConfig, HttpError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted transport keyed by `METHOD url`
#[derive(Clone, Default)]
pub struct ScriptedHttp {
    replies: Arc<Mutex<HashMap<String, (u16, String)>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &str, url: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(format!("{method} {url}"), (status, body.to_string()));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HttpError> {
        self.sent.lock().unwrap().push(request.clone());

        let key = format!("{} {}", request.method, request.url);
        let (status, body) = self
            .replies
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or((404, String::new()));

        Ok(HttpResponse {
            status,
            body: body.into_bytes(),
        })
    }
}

/// Client for the us region with no locale
pub fn client(http: ScriptedHttp) -> BattleNetClient<ScriptedHttp> {
    let config = ClientConfig {
        locale: None,
        ..ClientConfig::new("client", "secret")
    };
    BattleNetClient::with_http_client(http, &config)
}

pub const CLIENT_TOKEN_URL: &str = "https://us.battle.net/oauth/token?grant_type=client_credentials&client_id=client&client_secret=secret";

pub const ACCESS: &str = r#"{"access_token": "client_token", "token_type": "bearer", "expires_in": 86399}"#;
