use serde::de::DeserializeOwned;

use crate::auth::{Authenticator, CredentialStore};
use crate::config::ClientConfig;
use crate::decode::DecodeExt;
use crate::endpoint::{ApiCall, Endpoint, ProfileRef, Sc2Api, WowApi};
use crate::error::HttpError;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::sc2::{
    Sc2Grandmaster, Sc2LadderSummary, Sc2LadderTeam, Sc2League, Sc2Match, Sc2MatchHistory,
    Sc2Player, Sc2ProfileMetadata, Sc2Season, Sc2StaticProfile,
};
use crate::models::wow::{
    AccountProfileSummary, CharactersResult, ConnectedRealm, ConnectedRealmIndex, KeystoneAffix,
    KeystoneAffixIndex, Mount, MountIndex, MythicChallengeMode, MythicLeaderboard,
    MythicLeaderboardIndex, PetStats, PlayableClass, PlayableClassIndex, PowerType, PvpLeaderboard,
    PvpLeaderboardRow, Realm, RealmIndex, RealmStatus, RealmStatusIndex, RealmSummary, RegionIndex,
    Specialization, SpecializationIndex, TokenPrice, WowCharacter, WowRegion,
};
use crate::models::{KeyLink, Link};
use crate::region::{ApiType, Locale, Region};
use crate::request::{ApiRequest, RequestBuilder};

/// Battle.net API client
///
/// Generic over the HTTP client implementation for testability. Clones and
/// [`for_region`](Self::for_region) copies share one credential store.
pub struct BattleNetClient<H: HttpClient = ReqwestClient> {
    http: H,
    region: Region,
    locale: Option<Locale>,
    store: CredentialStore,
    authenticator: Authenticator<H>,
}

impl BattleNetClient<ReqwestClient> {
    /// Creates a client with the default HTTP implementation
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(ReqwestClient::new(), config)
    }
}

impl<H: HttpClient + Clone> BattleNetClient<H> {
    /// Creates a client with a custom HTTP client (for testing)
    pub fn with_http_client(http: H, config: &ClientConfig) -> Self {
        Self::with_store(http, config, CredentialStore::new())
    }

    /// Creates a client that reads and writes credentials in `store`
    pub fn with_store(http: H, config: &ClientConfig, store: CredentialStore) -> Self {
        let authenticator = Authenticator::with_http_client(
            http.clone(),
            &config.client_id,
            &config.client_secret,
            config.region,
            store.clone(),
        );

        Self {
            http,
            region: config.region,
            locale: config.locale,
            store,
            authenticator,
        }
    }

    /// Returns a client bound to another region, sharing credentials
    pub fn for_region(&self, region: Region) -> Self {
        Self {
            http: self.http.clone(),
            region,
            locale: self.locale,
            store: self.store.clone(),
            authenticator: self.authenticator.for_region(region),
        }
    }

    /// Replaces the locale sent with every call
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }
}

impl<H: HttpClient> BattleNetClient<H> {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// OAuth flows for this client's region
    pub fn authenticator(&self) -> &Authenticator<H> {
        &self.authenticator
    }

    /// Builds the request for an endpoint
    ///
    /// Fails with `Unauthorized` before any network activity when the
    /// endpoint's token has not been acquired.
    pub async fn request(&self, endpoint: &Endpoint) -> Result<ApiRequest, HttpError> {
        let authorization = self.store.authorization_for(endpoint.api_type).await?;

        let mut builder = RequestBuilder::new(endpoint.method.clone(), endpoint.url(self.region))
            .locale(self.locale)
            .queries(endpoint.queries.iter().cloned())
            .namespace(endpoint.namespace_header(self.region))
            .authorization(authorization);

        if endpoint.api_type == ApiType::Community {
            if let Some(api_key) = self.store.api_key().await {
                builder = builder.query("apikey", api_key);
            }
        }

        builder.build()
    }

    /// Sends one call and classifies the response
    pub async fn call(&self, api: &impl ApiCall) -> Result<Vec<u8>, HttpError> {
        let endpoint = api.endpoint(self.region);
        let request = self.request(&endpoint).await?;

        tracing::debug!("{} {}", endpoint.method, endpoint.url(self.region));
        self.send(&request).await
    }

    /// Sends one call and decodes the body as `T`
    pub async fn fetch<T: DeserializeOwned>(&self, api: &impl ApiCall) -> Result<T, HttpError> {
        self.call(api).await.decode()
    }

    /// Sends one call, decodes the wrapper `W` and extracts `T` from it
    pub async fn fetch_with<W, T, F>(&self, api: &impl ApiCall, extract: F) -> Result<T, HttpError>
    where
        W: DeserializeOwned,
        F: FnOnce(W) -> T,
    {
        self.call(api).await.decode_with(extract)
    }

    /// Follows a link from a previous response
    ///
    /// The link's own query (usually its namespace) is kept; the locale is
    /// appended and the client token authorizes the call.
    pub async fn get_resource<T: DeserializeOwned>(&self, link: &Link<T>) -> Result<T, HttpError> {
        let authorization = self.store.authorization_for(ApiType::GameData).await?;
        let request = RequestBuilder::new(reqwest::Method::GET, link.href.as_str())
            .locale(self.locale)
            .authorization(authorization)
            .build()?;

        tracing::debug!("GET {}", link.href);
        self.send(&request).await.decode()
    }

    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, HttpError> {
        let result = self.http.send(request).await?.into_result();
        if let Err(e) = &result {
            tracing::warn!("Battle.net call failed: {}", e);
        }
        result
    }

    // === World of Warcraft game data ===

    pub async fn get_connected_realm_index(&self) -> Result<Vec<Link<ConnectedRealm>>, HttpError> {
        self.fetch_with(&WowApi::ConnectedRealmIndex, |i: ConnectedRealmIndex| {
            i.connected_realms
        })
        .await
    }

    pub async fn get_connected_realm(&self, id: u64) -> Result<ConnectedRealm, HttpError> {
        self.fetch(&WowApi::ConnectedRealm(id)).await
    }

    pub async fn get_realm_index(&self) -> Result<Vec<RealmSummary>, HttpError> {
        self.fetch_with(&WowApi::RealmIndex, |i: RealmIndex| i.realms)
            .await
    }

    /// Realm by id or slug; the id wins when both are given
    pub async fn get_realm(&self, id: Option<u64>, slug: Option<&str>) -> Result<Realm, HttpError> {
        self.fetch(&WowApi::realm(id, slug)?).await
    }

    pub async fn get_region_index(&self) -> Result<Vec<Link<WowRegion>>, HttpError> {
        self.fetch_with(&WowApi::RegionIndex, |i: RegionIndex| i.regions)
            .await
    }

    pub async fn get_keystone_affixes(&self) -> Result<Vec<KeyLink<KeystoneAffix>>, HttpError> {
        self.fetch_with(&WowApi::KeystoneAffixIndex, |i: KeystoneAffixIndex| {
            i.affixes
        })
        .await
    }

    pub async fn get_keystone_affix(&self, id: u64) -> Result<KeystoneAffix, HttpError> {
        self.fetch(&WowApi::KeystoneAffix(id)).await
    }

    pub async fn get_mythic_challenge_mode(&self) -> Result<MythicChallengeMode, HttpError> {
        self.fetch(&WowApi::MythicChallengeMode).await
    }

    pub async fn get_mythic_leaderboard_index(
        &self,
        connected_realm_id: u64,
    ) -> Result<MythicLeaderboardIndex, HttpError> {
        self.fetch(&WowApi::MythicLeaderboardIndex { connected_realm_id })
            .await
    }

    pub async fn get_mythic_leaderboard(
        &self,
        connected_realm_id: u64,
        dungeon_id: u64,
        period: u64,
    ) -> Result<MythicLeaderboard, HttpError> {
        self.fetch(&WowApi::MythicLeaderboard {
            connected_realm_id,
            dungeon_id,
            period,
        })
        .await
    }

    pub async fn get_playable_classes(&self) -> Result<Vec<KeyLink<PlayableClass>>, HttpError> {
        self.fetch_with(&WowApi::PlayableClassIndex, |i: PlayableClassIndex| {
            i.classes
        })
        .await
    }

    pub async fn get_playable_class(&self, id: u64) -> Result<PlayableClass, HttpError> {
        self.fetch(&WowApi::PlayableClass(id)).await
    }

    pub async fn get_playable_specializations(&self) -> Result<SpecializationIndex, HttpError> {
        self.fetch(&WowApi::PlayableSpecializationIndex).await
    }

    pub async fn get_playable_specialization(&self, id: u64) -> Result<Specialization, HttpError> {
        self.fetch(&WowApi::PlayableSpecialization(id)).await
    }

    pub async fn get_power_type(&self, id: u64) -> Result<PowerType, HttpError> {
        self.fetch(&WowApi::PowerType(id)).await
    }

    pub async fn get_mounts(&self) -> Result<Vec<KeyLink<Mount>>, HttpError> {
        self.fetch_with(&WowApi::MountIndex, |i: MountIndex| i.mounts)
            .await
    }

    pub async fn get_token_price(&self) -> Result<TokenPrice, HttpError> {
        self.fetch(&WowApi::TokenIndex).await
    }

    // === World of Warcraft profile ===

    pub async fn get_account_profile_summary(&self) -> Result<AccountProfileSummary, HttpError> {
        self.fetch(&WowApi::AccountProfileSummary).await
    }

    // === World of Warcraft legacy community ===

    /// Characters of the logged in user
    pub async fn get_characters(&self) -> Result<Vec<WowCharacter>, HttpError> {
        self.fetch_with(&WowApi::UserCharacters, |r: CharactersResult| {
            r.characters
        })
        .await
    }

    /// Legacy PvP leaderboard; `bracket` is one of 2v2, 3v3, 5v5 or rbg
    pub async fn get_pvp_leaderboard(
        &self,
        bracket: &str,
    ) -> Result<Vec<PvpLeaderboardRow>, HttpError> {
        let api = WowApi::pvp_leaderboard(bracket)?;
        self.fetch_with(&api, |b: PvpLeaderboard| b.rows).await
    }

    pub async fn get_pet_stats(&self, species_id: u64) -> Result<PetStats, HttpError> {
        self.fetch(&WowApi::pet_stats(species_id)).await
    }

    pub async fn get_realm_status(&self) -> Result<Vec<RealmStatus>, HttpError> {
        self.fetch_with(&WowApi::RealmStatus, |s: RealmStatusIndex| s.realms)
            .await
    }

    // === StarCraft II ===

    pub async fn get_sc2_static_profile(&self) -> Result<Sc2StaticProfile, HttpError> {
        self.fetch(&Sc2Api::StaticProfile).await
    }

    pub async fn get_sc2_metadata(&self, profile: ProfileRef) -> Result<Sc2ProfileMetadata, HttpError> {
        self.fetch(&Sc2Api::MetadataProfile(profile)).await
    }

    pub async fn get_sc2_ladder_summary(
        &self,
        profile: ProfileRef,
    ) -> Result<Sc2LadderSummary, HttpError> {
        self.fetch(&Sc2Api::LadderSummary(profile)).await
    }

    pub async fn get_sc2_grandmaster(&self) -> Result<Vec<Sc2LadderTeam>, HttpError> {
        self.fetch_with(&Sc2Api::Grandmaster, |g: Sc2Grandmaster| g.ladder_teams)
            .await
    }

    pub async fn get_sc2_season(&self) -> Result<Sc2Season, HttpError> {
        self.fetch(&Sc2Api::Season).await
    }

    /// Profiles linked to a Battle.net account
    pub async fn get_sc2_player(&self, account_id: u64) -> Result<Vec<Sc2Player>, HttpError> {
        self.fetch(&Sc2Api::Player { account_id }).await
    }

    pub async fn get_sc2_match_history(&self, profile: ProfileRef) -> Result<Vec<Sc2Match>, HttpError> {
        self.fetch_with(&Sc2Api::LegacyMatchHistory(profile), |h: Sc2MatchHistory| {
            h.matches
        })
        .await
    }

    pub async fn get_sc2_league(
        &self,
        season_id: u32,
        queue_id: u32,
        team_type: u32,
        league_id: u32,
    ) -> Result<Sc2League, HttpError> {
        self.fetch(&Sc2Api::League {
            season_id,
            queue_id,
            team_type,
            league_id,
        })
        .await
    }
}

impl<H: HttpClient + Clone> Clone for BattleNetClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            region: self.region,
            locale: self.locale,
            store: self.store.clone(),
            authenticator: self.authenticator.clone(),
        }
    }
}
