//! Client SDK for the Battle.net REST API
//!
//! Covers World of Warcraft and StarCraft II game data, profile and legacy
//! community endpoints, plus the OAuth flows that provide their credentials.
//! A call flows catalog entry → request builder → transport → status
//! classification → decode.

pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod region;
pub mod request;

#[cfg(test)]
mod testutil;

pub use auth::{AccessToken, Authenticator, CredentialStore, TokenKind};
pub use client::BattleNetClient;
pub use config::{ClientConfig, ConfigManager};
pub use decode::DecodeExt;
pub use endpoint::{ApiCall, Endpoint, Sc2Api, WowApi};
pub use error::{ErrorKind, HttpError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use region::{ApiType, Locale, Namespace, Region, Scope};
