//! StarCraft II response models

use serde::{Deserialize, Serialize};

use super::common::SelfLink;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Reward {
    pub id: String,
    #[serde(rename = "achievementId", default)]
    pub achievement_id: Option<String>,
    pub name: String,
    pub image_url: String,
    pub is_skin: bool,
    pub ui_order_hint: i32,
    pub unlockable_type: String,
    pub flags: i64,
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Achievement {
    pub category_id: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub image_url: String,
}

/// Static data shared by every profile in a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2StaticProfile {
    pub achievements: Vec<Sc2Achievement>,
    #[serde(default)]
    pub rewards: Vec<Sc2Reward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2ProfileMetadata {
    pub name: String,
    pub profile_url: String,
    pub avatar_url: String,
    pub profile_id: String,
    pub region_id: u32,
    pub realm_id: u32,
}

/// Account-to-profile lookup row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Player {
    pub name: String,
    pub profile_url: String,
    pub avatar_url: String,
    pub profile_id: String,
    pub region_id: u32,
    pub realm_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Season {
    pub season_id: u32,
    pub number: u32,
    pub year: u32,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2LadderSummary {
    #[serde(default)]
    pub show_case_entries: Vec<serde_json::Value>,
    #[serde(default)]
    pub placement_matches: Vec<serde_json::Value>,
    #[serde(default)]
    pub all_ladder_memberships: Vec<Sc2LadderMembership>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2LadderMembership {
    pub ladder_id: String,
    pub local_game_mode: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2Grandmaster {
    pub ladder_teams: Vec<Sc2LadderTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2LadderTeam {
    pub team_members: Vec<Sc2TeamMember>,
    pub previous_rank: u32,
    pub points: i64,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub mmr: Option<i64>,
    pub join_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc2TeamMember {
    pub id: String,
    pub realm: u32,
    pub region: u32,
    pub display_name: String,
    #[serde(default)]
    pub clan_tag: Option<String>,
    #[serde(default)]
    pub favorite_race: Option<String>,
}

/// League data from the game data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2League {
    #[serde(rename = "_links", default)]
    pub links: Option<SelfLink<Sc2League>>,
    pub key: Sc2LeagueKey,
    #[serde(default)]
    pub tier: Vec<Sc2LeagueTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2LeagueKey {
    pub league_id: u32,
    pub season_id: u32,
    pub queue_id: u32,
    pub team_type: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2LeagueTier {
    pub id: u32,
    #[serde(default)]
    pub min_rating: Option<i64>,
    #[serde(default)]
    pub max_rating: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2MatchHistory {
    pub matches: Vec<Sc2Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sc2Match {
    pub map: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub decision: String,
    pub speed: String,
    pub date: i64,
}
