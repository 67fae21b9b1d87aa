//! Static lookup tables for regions, locales, namespaces, scopes and API types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the header carrying the namespace for game data and profile calls
pub const NAMESPACE_HEADER: &str = "Battlenet-Namespace";

/// A Battle.net region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Us, Region::Eu, Region::Kr, Region::Tw, Region::Cn];

    /// Short lowercase code used in hosts and namespaces
    pub fn code(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// Host for game data, profile and community calls
    pub fn api_uri(self) -> &'static str {
        match self {
            Self::Us => "https://us.api.blizzard.com",
            Self::Eu => "https://eu.api.blizzard.com",
            Self::Kr => "https://kr.api.blizzard.com",
            Self::Tw => "https://tw.api.blizzard.com",
            Self::Cn => "https://gateway.battlenet.com.cn",
        }
    }

    /// Host serving the OAuth endpoints
    pub fn oauth_uri(self) -> &'static str {
        match self {
            Self::Us => "https://us.battle.net",
            Self::Eu => "https://eu.battle.net",
            Self::Kr | Self::Tw => "https://apac.battle.net",
            Self::Cn => "https://www.battlenet.com.cn",
        }
    }

    pub fn authorize_uri(self) -> String {
        format!("{}/oauth/authorize", self.oauth_uri())
    }

    pub fn token_uri(self) -> String {
        format!("{}/oauth/token", self.oauth_uri())
    }

    pub fn check_token_uri(self) -> String {
        format!("{}/oauth/check_token", self.oauth_uri())
    }

    pub fn user_info_uri(self) -> String {
        format!("{}/oauth/userinfo", self.oauth_uri())
    }

    /// Numeric region id used by StarCraft II paths
    pub fn sc2_region_id(self) -> u8 {
        match self {
            Self::Us => 1,
            Self::Eu => 2,
            Self::Kr | Self::Tw => 3,
            Self::Cn => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown region: {s}"))
    }
}

/// Locale used for localized strings in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "es_MX")]
    EsMx,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 12] = [
        Locale::EnUs,
        Locale::EsMx,
        Locale::PtBr,
        Locale::DeDe,
        Locale::EnGb,
        Locale::EsEs,
        Locale::FrFr,
        Locale::ItIt,
        Locale::RuRu,
        Locale::KoKr,
        Locale::ZhTw,
        Locale::ZhCn,
    ];

    /// Code sent as the `locale` query parameter
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EsMx => "es_MX",
            Self::PtBr => "pt_BR",
            Self::DeDe => "de_DE",
            Self::EnGb => "en_GB",
            Self::EsEs => "es_ES",
            Self::FrFr => "fr_FR",
            Self::ItIt => "it_IT",
            Self::RuRu => "ru_RU",
            Self::KoKr => "ko_KR",
            Self::ZhTw => "zh_TW",
            Self::ZhCn => "zh_CN",
        }
    }

    /// Matches an OS or BCP 47 style tag such as `en-US` or `fr_FR.UTF-8`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.split('.').next().unwrap_or(tag).replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(&tag))
    }

    /// Locale of the running system, when Battle.net supports it
    pub fn from_system() -> Option<Self> {
        sys_locale::get_locale().and_then(|tag| Self::from_tag(&tag))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("Unknown locale: {s}"))
    }
}

/// Classification of an endpoint by the credential it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiType {
    /// Game data, authorized with the client access token
    GameData,
    /// Player profile data, authorized with the user access token
    Profile,
    /// Legacy community APIs, authorized with the deprecated API key if any
    Community,
}

/// Document namespace for game data and profile calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Static,
    Dynamic,
    Profile,
}

impl Namespace {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Profile => "profile",
        }
    }

    /// Header value for a region, e.g. `dynamic-us`
    pub fn header_value(self, region: Region) -> String {
        format!("{}-{}", self.prefix(), region.code())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            "profile" => Ok(Self::Profile),
            _ => Err(format!("Unknown namespace: {s}")),
        }
    }
}

/// OAuth scope requested from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "openid")]
    OpenId,
    #[serde(rename = "wow.profile")]
    WowProfile,
    #[serde(rename = "sc2.profile")]
    Sc2Profile,
    #[serde(rename = "d3.profile")]
    D3Profile,
}

impl Scope {
    pub fn value(self) -> &'static str {
        match self {
            Self::OpenId => "openid",
            Self::WowProfile => "wow.profile",
            Self::Sc2Profile => "sc2.profile",
            Self::D3Profile => "d3.profile",
        }
    }

    /// Space separated scope list for the authorize URL
    pub fn join(scopes: &[Scope]) -> String {
        scopes
            .iter()
            .map(|s| s.value())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::OpenId, Self::WowProfile, Self::Sc2Profile, Self::D3Profile]
            .into_iter()
            .find(|scope| scope.value() == s)
            .ok_or_else(|| format!("Unknown scope: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_region_hosts() {
        assert_eq!(Region::Us.api_uri(), "https://us.api.blizzard.com");
        assert_eq!(Region::Us.token_uri(), "https://us.battle.net/oauth/token");
        assert_eq!(
            Region::Us.authorize_uri(),
            "https://us.battle.net/oauth/authorize"
        );
        assert_eq!(
            Region::Us.check_token_uri(),
            "https://us.battle.net/oauth/check_token"
        );
    }

    #[test]
    fn asian_regions_share_oauth_host() {
        assert_eq!(Region::Kr.oauth_uri(), Region::Tw.oauth_uri());
        assert_eq!(Region::Kr.api_uri(), "https://kr.api.blizzard.com");
    }

    #[test]
    fn china_uses_gateway() {
        assert_eq!(Region::Cn.api_uri(), "https://gateway.battlenet.com.cn");
        assert_eq!(Region::Cn.sc2_region_id(), 5);
    }

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert!("mars".parse::<Region>().is_err());
    }

    #[test]
    fn namespace_header_value() {
        assert_eq!(Namespace::Dynamic.header_value(Region::Us), "dynamic-us");
        assert_eq!(Namespace::Static.header_value(Region::Eu), "static-eu");
        assert_eq!(Namespace::Profile.header_value(Region::Kr), "profile-kr");
    }

    #[test]
    fn locale_from_tag_accepts_os_formats() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("fr_FR.UTF-8"), Some(Locale::FrFr));
        assert_eq!(Locale::from_tag("zh-tw"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_tag("nl-NL"), None);
    }

    #[test]
    fn locale_serializes_as_code() {
        let json = serde_json::to_string(&Locale::PtBr).unwrap();
        assert_eq!(json, "\"pt_BR\"");
    }

    #[test]
    fn scopes_join_with_spaces() {
        assert_eq!(
            Scope::join(&[Scope::WowProfile, Scope::Sc2Profile]),
            "wow.profile sc2.profile"
        );
        assert_eq!("openid".parse::<Scope>().unwrap(), Scope::OpenId);
    }
}
