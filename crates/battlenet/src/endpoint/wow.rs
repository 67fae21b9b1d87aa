//! World of Warcraft endpoints

use std::fmt;
use std::str::FromStr;

use super::{segment, ApiCall, Endpoint, Game};
use crate::error::HttpError;
use crate::region::{ApiType, Namespace, Region};

/// Rated PvP bracket for the legacy leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PvpBracket {
    TwoVTwo,
    ThreeVThree,
    FiveVFive,
    RatedBattleground,
}

impl PvpBracket {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoVTwo => "2v2",
            Self::ThreeVThree => "3v3",
            Self::FiveVFive => "5v5",
            Self::RatedBattleground => "rbg",
        }
    }
}

impl fmt::Display for PvpBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PvpBracket {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2v2" => Ok(Self::TwoVTwo),
            "3v3" => Ok(Self::ThreeVThree),
            "5v5" => Ok(Self::FiveVFive),
            "rbg" => Ok(Self::RatedBattleground),
            _ => Err(HttpError::malformed_body(format!(
                "Unknown PvP bracket {s:?}; expected 2v2, 3v3, 5v5 or rbg"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alliance => "alliance",
            Self::Horde => "horde",
        }
    }
}

impl FromStr for Faction {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alliance" => Ok(Self::Alliance),
            "horde" => Ok(Self::Horde),
            _ => Err(HttpError::malformed_body(format!("Unknown faction {s:?}"))),
        }
    }
}

/// Realm lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealmRef {
    Id(u64),
    Slug(String),
}

/// World of Warcraft endpoint table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WowApi {
    // Game data
    Achievement(u64),
    Auctions { realm: String },
    ConnectedRealmIndex,
    ConnectedRealm(u64),
    Item(u64),
    ItemSet(u64),
    MountIndex,
    KeystoneAffixIndex,
    KeystoneAffix(u64),
    MythicKeystoneDungeonIndex,
    MythicKeystoneDungeon(u64),
    MythicKeystoneIndex,
    MythicKeystonePeriodIndex,
    MythicKeystonePeriod(u64),
    MythicKeystoneSeasonIndex,
    MythicKeystoneSeason(u64),
    MythicLeaderboardIndex {
        connected_realm_id: u64,
    },
    MythicLeaderboard {
        connected_realm_id: u64,
        dungeon_id: u64,
        period: u64,
    },
    MythicRaidLeaderboard {
        raid: String,
        faction: Faction,
    },
    MythicChallengeMode,
    PlayableClassIndex,
    PlayableClass(u64),
    PvpTalentSlots(u64),
    PlayableSpecializationIndex,
    PlayableSpecialization(u64),
    PowerTypeIndex,
    PowerType(u64),
    PlayableRaceIndex,
    PlayableRace(u64),
    RealmIndex,
    Realm(RealmRef),
    RegionIndex,
    GameRegion(u64),
    TokenIndex,

    // Profile
    AccountProfileSummary,
    MythicKeystoneProfile {
        realm_slug: String,
        character_name: String,
    },
    MythicKeystoneProfileSeason {
        realm_slug: String,
        character_name: String,
        season_id: u64,
    },

    // Legacy community
    UserCharacters,
    ChallengeLeaderboard {
        realm: String,
    },
    TopChallengeLeaderboards,
    Character {
        realm: String,
        name: String,
        fields: Vec<String>,
    },
    Guild {
        realm: String,
        name: String,
        fields: Vec<String>,
    },
    Bosses,
    Boss(u64),
    Pets,
    PetAbility(u64),
    PetSpecies(u64),
    PetStats {
        species_id: u64,
        level: u32,
        breed_id: u32,
        quality_id: u32,
    },
    PvpLeaderboard(PvpBracket),
    Quest(u64),
    RealmStatus,
    Recipe(u64),
    Spell(u64),
    Zones,
    Zone(u64),
    Battlegroups,
    CharacterRaces,
    CharacterClasses,
    CharacterAchievements,
    GuildRewards,
    GuildPerks,
    GuildAchievements,
    ItemClasses,
    Talents,
    PetTypes,
}

impl WowApi {
    /// Realm by id or slug; the id wins when both are given
    pub fn realm(id: Option<u64>, slug: Option<&str>) -> Result<Self, HttpError> {
        match (id, slug) {
            (Some(id), _) => Ok(Self::Realm(RealmRef::Id(id))),
            (None, Some(slug)) => Ok(Self::Realm(RealmRef::Slug(slug.to_string()))),
            (None, None) => Err(HttpError::malformed_body("Must pass a value for id or slug")),
        }
    }

    /// Legacy PvP leaderboard for a bracket name such as `3v3`
    pub fn pvp_leaderboard(bracket: &str) -> Result<Self, HttpError> {
        Ok(Self::PvpLeaderboard(bracket.parse()?))
    }

    /// Pet stats at level 1, breed 3, quality 1
    pub fn pet_stats(species_id: u64) -> Self {
        Self::PetStats {
            species_id,
            level: 1,
            breed_id: 3,
            quality_id: 1,
        }
    }

    pub fn api_type(&self) -> ApiType {
        use WowApi::*;
        match self {
            Achievement(_)
            | Auctions { .. }
            | ConnectedRealmIndex
            | ConnectedRealm(_)
            | Item(_)
            | ItemSet(_)
            | MountIndex
            | KeystoneAffixIndex
            | KeystoneAffix(_)
            | MythicKeystoneDungeonIndex
            | MythicKeystoneDungeon(_)
            | MythicKeystoneIndex
            | MythicKeystonePeriodIndex
            | MythicKeystonePeriod(_)
            | MythicKeystoneSeasonIndex
            | MythicKeystoneSeason(_)
            | MythicLeaderboardIndex { .. }
            | MythicLeaderboard { .. }
            | MythicRaidLeaderboard { .. }
            | MythicChallengeMode
            | PlayableClassIndex
            | PlayableClass(_)
            | PvpTalentSlots(_)
            | PlayableSpecializationIndex
            | PlayableSpecialization(_)
            | PowerTypeIndex
            | PowerType(_)
            | PlayableRaceIndex
            | PlayableRace(_)
            | RealmIndex
            | Realm(_)
            | RegionIndex
            | GameRegion(_)
            | TokenIndex => ApiType::GameData,

            AccountProfileSummary
            | MythicKeystoneProfile { .. }
            | MythicKeystoneProfileSeason { .. } => ApiType::Profile,

            _ => ApiType::Community,
        }
    }

    /// Default namespace; `None` for legacy community calls
    pub fn namespace(&self) -> Option<Namespace> {
        use WowApi::*;
        match self.api_type() {
            ApiType::Community => None,
            ApiType::Profile => Some(Namespace::Profile),
            ApiType::GameData => match self {
                ConnectedRealmIndex
                | ConnectedRealm(_)
                | MythicKeystoneDungeonIndex
                | MythicKeystoneDungeon(_)
                | MythicKeystoneIndex
                | MythicKeystonePeriodIndex
                | MythicKeystonePeriod(_)
                | MythicKeystoneSeasonIndex
                | MythicKeystoneSeason(_)
                | MythicLeaderboardIndex { .. }
                | MythicLeaderboard { .. }
                | MythicRaidLeaderboard { .. }
                | MythicChallengeMode
                | RealmIndex
                | Realm(_)
                | RegionIndex
                | GameRegion(_)
                | TokenIndex => Some(Namespace::Dynamic),
                _ => Some(Namespace::Static),
            },
        }
    }

    pub fn path(&self) -> String {
        use WowApi::*;
        match self {
            Achievement(id) => format!("/achievement/{id}"),
            Auctions { realm } => format!("/auction/data/{}", segment(realm)),
            ConnectedRealmIndex => "/connected-realm/index".to_string(),
            ConnectedRealm(id) => format!("/connected-realm/{id}"),
            Item(id) => format!("/item/{id}"),
            ItemSet(id) => format!("/item-set/{id}"),
            MountIndex => "/mount/index".to_string(),
            KeystoneAffixIndex => "/keystone-affix/index".to_string(),
            KeystoneAffix(id) => format!("/keystone-affix/{id}"),
            MythicKeystoneDungeonIndex => "/mythic-keystone/dungeon/index".to_string(),
            MythicKeystoneDungeon(id) => format!("/mythic-keystone/dungeon/{id}"),
            MythicKeystoneIndex => "/mythic-keystone/index".to_string(),
            MythicKeystonePeriodIndex => "/mythic-keystone/period/index".to_string(),
            MythicKeystonePeriod(id) => format!("/mythic-keystone/period/{id}"),
            MythicKeystoneSeasonIndex => "/mythic-keystone/season/index".to_string(),
            MythicKeystoneSeason(id) => format!("/mythic-keystone/season/{id}"),
            MythicLeaderboardIndex { connected_realm_id } => {
                format!("/connected-realm/{connected_realm_id}/mythic-leaderboard/")
            }
            MythicLeaderboard {
                connected_realm_id,
                dungeon_id,
                period,
            } => format!(
                "/connected-realm/{connected_realm_id}/mythic-leaderboard/{dungeon_id}/period/{period}"
            ),
            MythicRaidLeaderboard { raid, faction } => format!(
                "/leaderboard/hall-of-fame/{}/{}",
                segment(raid),
                faction.as_str()
            ),
            MythicChallengeMode => "/mythic-challenge-mode/".to_string(),
            PlayableClassIndex => "/playable-class/index".to_string(),
            PlayableClass(id) => format!("/playable-class/{id}"),
            PvpTalentSlots(id) => format!("/playable-class/{id}/pvp-talent-slots"),
            PlayableSpecializationIndex => "/playable-specialization/index".to_string(),
            PlayableSpecialization(id) => format!("/playable-specialization/{id}"),
            PowerTypeIndex => "/power-type/index".to_string(),
            PowerType(id) => format!("/power-type/{id}"),
            PlayableRaceIndex => "/race/index".to_string(),
            PlayableRace(id) => format!("/race/{id}"),
            RealmIndex => "/realm/index".to_string(),
            Realm(RealmRef::Id(id)) => format!("/realm/{id}"),
            Realm(RealmRef::Slug(slug)) => format!("/realm/{}", segment(slug)),
            RegionIndex => "/region/index".to_string(),
            GameRegion(id) => format!("/region/{id}"),
            TokenIndex => "/token/index".to_string(),

            AccountProfileSummary => "/user/wow".to_string(),
            MythicKeystoneProfile {
                realm_slug,
                character_name,
            } => format!(
                "/character/{}/{}/mythic-keystone-profile",
                segment(realm_slug),
                segment(character_name)
            ),
            MythicKeystoneProfileSeason {
                realm_slug,
                character_name,
                season_id,
            } => format!(
                "/character/{}/{}/mythic-keystone-profile/season/{season_id}",
                segment(realm_slug),
                segment(character_name)
            ),

            UserCharacters => "/user/characters".to_string(),
            ChallengeLeaderboard { realm } => format!("/challenge/{}", segment(realm)),
            TopChallengeLeaderboards => "/challenge/region".to_string(),
            Character { realm, name, .. } => {
                format!("/character/{}/{}", segment(realm), segment(name))
            }
            Guild { realm, name, .. } => format!("/guild/{}/{}", segment(realm), segment(name)),
            Bosses => "/boss/".to_string(),
            Boss(id) => format!("/boss/{id}"),
            Pets => "/pet/".to_string(),
            PetAbility(id) => format!("/pet/ability/{id}"),
            PetSpecies(id) => format!("/pet/species/{id}"),
            PetStats { species_id, .. } => format!("/pet/stats/{species_id}"),
            PvpLeaderboard(bracket) => format!("/leaderboard/{bracket}"),
            Quest(id) => format!("/quest/{id}"),
            RealmStatus => "/realm/status".to_string(),
            Recipe(id) => format!("/recipe/{id}"),
            Spell(id) => format!("/spell/{id}"),
            Zones => "/zone/".to_string(),
            Zone(id) => format!("/zone/{id}"),
            Battlegroups => "/data/battlegroups/".to_string(),
            CharacterRaces => "/data/character/races".to_string(),
            CharacterClasses => "/data/character/classes".to_string(),
            CharacterAchievements => "/data/character/achievements".to_string(),
            GuildRewards => "/data/guild/rewards".to_string(),
            GuildPerks => "/data/guild/perks".to_string(),
            GuildAchievements => "/data/guild/achievements".to_string(),
            ItemClasses => "/data/item/classes".to_string(),
            Talents => "/data/talents".to_string(),
            PetTypes => "/data/pet/types".to_string(),
        }
    }

    fn queries(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Character { fields, .. } | Self::Guild { fields, .. } if !fields.is_empty() => {
                vec![("fields", fields.join(","))]
            }
            Self::PetStats {
                level,
                breed_id,
                quality_id,
                ..
            } => vec![
                ("level", level.to_string()),
                ("breedId", breed_id.to_string()),
                ("qualityId", quality_id.to_string()),
            ],
            _ => Vec::new(),
        }
    }
}

impl ApiCall for WowApi {
    fn endpoint(&self, _region: Region) -> Endpoint {
        let mut endpoint = Endpoint::get(Game::Wow, self.api_type(), self.path())
            .with_namespace(self.namespace());

        // The account summary lives at /profile/user/wow
        if matches!(self, Self::AccountProfileSummary) {
            endpoint = endpoint.rebase("/profile");
        }

        self.queries()
            .into_iter()
            .fold(endpoint, |endpoint, (name, value)| endpoint.query(name, value))
    }
}
