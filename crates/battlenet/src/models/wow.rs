//! World of Warcraft response models

use serde::{Deserialize, Serialize};

use super::common::{KeyLink, Link, LocalizedString, SelfLink, TypeName};

// === Connected realms ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRealmIndex {
    #[serde(rename = "_links", default)]
    pub links: Option<SelfLink<ConnectedRealmIndex>>,
    pub connected_realms: Vec<Link<ConnectedRealm>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRealm {
    pub id: u64,
    pub has_queue: bool,
    pub status: TypeName,
    pub population: TypeName,
    pub realms: Vec<Realm>,
    #[serde(default)]
    pub mythic_leaderboards: Option<Link<MythicLeaderboardIndex>>,
    #[serde(default)]
    pub auctions: Option<Link<AuctionIndex>>,
}

// === Realms ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmIndex {
    pub realms: Vec<RealmSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmSummary {
    pub key: Link<Realm>,
    pub name: LocalizedString,
    pub id: u64,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    pub id: u64,
    pub name: LocalizedString,
    pub slug: String,
    #[serde(default)]
    pub region: Option<KeyLink<WowRegion>>,
    #[serde(default)]
    pub category: Option<LocalizedString>,
    pub locale: String,
    pub timezone: String,
    #[serde(rename = "type")]
    pub realm_type: TypeName,
    pub is_tournament: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionIndex {
    pub regions: Vec<Link<WowRegion>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WowRegion {
    pub id: u64,
    pub name: LocalizedString,
    pub tag: String,
}

// === Auctions ===

/// Placeholder target for the per-realm auction dump link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionIndex {
    pub auctions: Vec<Auction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: u64,
    pub item: AuctionItem,
    pub quantity: u64,
    #[serde(default)]
    pub buyout: Option<u64>,
    #[serde(default)]
    pub unit_price: Option<u64>,
    pub time_left: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionItem {
    pub id: u64,
}

// === Mythic keystone ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystoneAffixIndex {
    pub affixes: Vec<KeyLink<KeystoneAffix>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystoneAffix {
    pub id: u64,
    pub name: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystoneAffixSummary {
    pub keystone_affix: KeyLink<KeystoneAffix>,
    #[serde(default)]
    pub starting_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MythicChallengeMode {
    #[serde(rename = "_links", default)]
    pub links: Option<SelfLink<MythicChallengeMode>>,
    pub current_period: u64,
    pub current_period_start_timestamp: i64,
    pub current_period_end_timestamp: i64,
    pub current_keystone_affixes: Vec<KeystoneAffixSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MythicLeaderboardIndex {
    pub current_leaderboards: Vec<KeyLink<MythicLeaderboard>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MythicLeaderboard {
    pub name: LocalizedString,
    pub period: u64,
    pub period_start_timestamp: i64,
    pub period_end_timestamp: i64,
    #[serde(default)]
    pub leading_groups: Vec<MythicLeadingGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MythicLeadingGroup {
    pub ranking: u32,
    pub duration: u64,
    pub completed_timestamp: i64,
    pub keystone_level: u32,
}

// === Playable classes and specializations ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableClassIndex {
    pub classes: Vec<KeyLink<PlayableClass>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableClass {
    pub id: u64,
    pub name: LocalizedString,
    #[serde(default)]
    pub power_type: Option<KeyLink<PowerType>>,
    #[serde(default)]
    pub specializations: Vec<KeyLink<Specialization>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerType {
    pub id: u64,
    pub name: LocalizedString,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationIndex {
    pub character_specializations: Vec<KeyLink<Specialization>>,
    pub pet_specializations: Vec<KeyLink<Specialization>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: u64,
    pub name: LocalizedString,
    pub playable_class: KeyLink<PlayableClass>,
    pub gender_description: GenderName,
    pub role: TypeName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderName {
    pub male: LocalizedString,
    pub female: LocalizedString,
}

// === Mounts and tokens ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountIndex {
    pub mounts: Vec<KeyLink<Mount>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    pub id: u64,
    pub name: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
}

/// WoW Token price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub last_updated_timestamp: i64,
    /// Price in copper
    pub price: u64,
}

// === Profile ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfileSummary {
    pub id: u64,
    #[serde(default)]
    pub wow_accounts: Vec<WowAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WowAccount {
    pub id: u64,
    #[serde(default)]
    pub characters: Vec<AccountCharacter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCharacter {
    pub name: String,
    pub id: u64,
    pub level: u32,
    pub realm: RealmReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmReference {
    pub key: Link<Realm>,
    pub name: LocalizedString,
    pub id: u64,
    pub slug: String,
}

// === Legacy community ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharactersResult {
    pub characters: Vec<WowCharacter>,
}

/// Character summary from the legacy user characters call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WowCharacter {
    pub name: String,
    pub realm: String,
    #[serde(default)]
    pub battlegroup: Option<String>,
    #[serde(rename = "class")]
    pub class_id: u32,
    #[serde(rename = "race")]
    pub race_id: u32,
    pub gender: u32,
    pub level: u32,
    pub achievement_points: u64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub guild: Option<String>,
    #[serde(default)]
    pub guild_realm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvpLeaderboard {
    pub rows: Vec<PvpLeaderboardRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpLeaderboardRow {
    pub ranking: u32,
    pub rating: u32,
    pub name: String,
    pub realm_id: u64,
    pub realm_name: String,
    pub realm_slug: String,
    pub race_id: u32,
    pub class_id: u32,
    pub spec_id: u32,
    pub faction_id: u32,
    pub gender_id: u32,
    pub season_wins: u32,
    pub season_losses: u32,
    pub weekly_wins: u32,
    pub weekly_losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStats {
    pub species_id: u64,
    pub breed_id: u32,
    pub pet_quality_id: u32,
    pub level: u32,
    pub health: u32,
    pub power: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmStatusIndex {
    pub realms: Vec<RealmStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmStatus {
    #[serde(rename = "type")]
    pub realm_type: String,
    pub population: String,
    pub queue: bool,
    pub status: bool,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub battlegroup: Option<String>,
    pub locale: String,
    pub timezone: String,
}
