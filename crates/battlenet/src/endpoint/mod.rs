//! Declarative endpoint catalog
//!
//! Each catalog entry resolves to an [`Endpoint`]: the method, path, API type,
//! namespace and query parameters of one REST call. The client turns an
//! endpoint into a request; entries never touch the network themselves.

pub mod sc2;
pub mod wow;

use reqwest::Method;

use crate::region::{ApiType, Namespace, Region};

pub use sc2::{ProfileRef, Sc2Api};
pub use wow::{Faction, PvpBracket, RealmRef, WowApi};

/// Game an endpoint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Wow,
    Sc2,
}

impl Game {
    /// Path prefix between the host and the endpoint path
    pub fn base_path(self, api_type: ApiType) -> &'static str {
        match (self, api_type) {
            (Self::Wow, ApiType::GameData) => "/data/wow",
            (Self::Wow, ApiType::Profile) => "/profile/wow",
            (Self::Wow, ApiType::Community) => "/wow",
            (Self::Sc2, ApiType::GameData) => "/data/sc2",
            (Self::Sc2, ApiType::Profile | ApiType::Community) => "/sc2",
        }
    }
}

/// One REST call, ready to be built into a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub base_path: &'static str,
    pub path: String,
    pub api_type: ApiType,
    pub namespace: Option<Namespace>,
    pub queries: Vec<(String, String)>,
}

impl Endpoint {
    /// A GET endpoint under the game's base path for `api_type`
    pub fn get(game: Game, api_type: ApiType, path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            base_path: game.base_path(api_type),
            path: path.into(),
            api_type,
            namespace: None,
            queries: Vec::new(),
        }
    }

    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Replaces the default namespace, or drops it with `None`
    pub fn with_namespace(mut self, namespace: Option<Namespace>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.queries.push((name.into(), value.to_string()));
        self
    }

    /// Overrides the base path for calls outside the usual layout
    pub fn rebase(mut self, base_path: &'static str) -> Self {
        self.base_path = base_path;
        self
    }

    /// `{host}{base path}{path}` for a region, without query parameters
    pub fn url(&self, region: Region) -> String {
        format!("{}{}{}", region.api_uri(), self.base_path, self.path)
    }

    /// Namespace header value for a region
    pub fn namespace_header(&self, region: Region) -> Option<String> {
        self.namespace.map(|ns| ns.header_value(region))
    }
}

/// Anything the client can dispatch
///
/// Catalog tables resolve to an endpoint for the client's region, since some
/// paths embed a region id.
pub trait ApiCall {
    fn endpoint(&self, region: Region) -> Endpoint;
}

impl ApiCall for Endpoint {
    fn endpoint(&self, _region: Region) -> Endpoint {
        self.clone()
    }
}

/// Percent-encodes one path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
