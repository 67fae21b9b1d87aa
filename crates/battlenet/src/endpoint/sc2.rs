//! StarCraft II endpoints
//!
//! Community paths embed the numeric region id of the client's region.

use super::{ApiCall, Endpoint, Game};
use crate::region::{ApiType, Region};

/// Identifies one StarCraft II profile within a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileRef {
    pub realm_id: u32,
    pub profile_id: u64,
}

impl ProfileRef {
    pub fn new(realm_id: u32, profile_id: u64) -> Self {
        Self {
            realm_id,
            profile_id,
        }
    }
}

/// StarCraft II endpoint table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sc2Api {
    // Community
    StaticProfile,
    MetadataProfile(ProfileRef),
    Profile(ProfileRef),
    LadderSummary(ProfileRef),
    Ladder {
        profile: ProfileRef,
        ladder_id: u64,
    },
    Grandmaster,
    Season,
    LegacyProfile(ProfileRef),
    LegacyLadders(ProfileRef),
    LegacyMatchHistory(ProfileRef),
    LegacyLadder(u64),
    LegacyAchievements,
    LegacyRewards,

    // Profile
    Player {
        account_id: u64,
    },

    // Game data
    League {
        season_id: u32,
        queue_id: u32,
        team_type: u32,
        league_id: u32,
    },
}

impl Sc2Api {
    pub fn api_type(&self) -> ApiType {
        match self {
            Self::League { .. } => ApiType::GameData,
            Self::Player { .. } => ApiType::Profile,
            _ => ApiType::Community,
        }
    }

    /// Path for a region; profile paths start with the region id
    pub fn path(&self, region: Region) -> String {
        let r = region.sc2_region_id();
        let profile = |p: &ProfileRef| format!("{r}/{}/{}", p.realm_id, p.profile_id);

        match self {
            Self::StaticProfile => format!("/static/profile/{r}"),
            Self::MetadataProfile(p) => format!("/metadata/profile/{}", profile(p)),
            Self::Profile(p) => format!("/profile/{}", profile(p)),
            Self::LadderSummary(p) => format!("/profile/{}/ladder/summary", profile(p)),
            Self::Ladder { profile: p, ladder_id } => {
                format!("/profile/{}/ladder/{ladder_id}", profile(p))
            }
            Self::Grandmaster => format!("/ladder/grandmaster/{r}"),
            Self::Season => format!("/ladder/season/{r}"),
            Self::LegacyProfile(p) => format!("/legacy/profile/{}", profile(p)),
            Self::LegacyLadders(p) => format!("/legacy/profile/{}/ladders", profile(p)),
            Self::LegacyMatchHistory(p) => format!("/legacy/profile/{}/matches", profile(p)),
            Self::LegacyLadder(ladder_id) => format!("/legacy/ladder/{r}/{ladder_id}"),
            Self::LegacyAchievements => format!("/legacy/data/achievements/{r}"),
            Self::LegacyRewards => format!("/legacy/data/rewards/{r}"),
            Self::Player { account_id } => format!("/player/{account_id}"),
            Self::League {
                season_id,
                queue_id,
                team_type,
                league_id,
            } => format!("/league/{season_id}/{queue_id}/{team_type}/{league_id}"),
        }
    }
}

impl ApiCall for Sc2Api {
    fn endpoint(&self, region: Region) -> Endpoint {
        Endpoint::get(Game::Sc2, self.api_type(), self.path(region))
    }
}
