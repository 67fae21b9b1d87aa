//! Test fixtures
//!
//! Canned Battle.net response bodies, trimmed to the fields the models read.

/// Client credentials token response
pub const ACCESS: &str = r#"{
    "access_token": "client_token_abc",
    "token_type": "bearer",
    "expires_in": 86399
}"#;

/// Authorization code token response
pub const USER_ACCESS: &str = r#"{
    "access_token": "user_token_xyz",
    "token_type": "bearer",
    "expires_in": 86399,
    "scope": "wow.profile",
    "sub": "100"
}"#;

pub const TOKEN_INFO: &str = r#"{
    "client_id": "client",
    "exp": 1893456000,
    "scope": ["wow.profile"],
    "authorities": ["IS_AUTHENTICATED_FULLY", "ROLE_CLIENT"]
}"#;

pub const CONNECTED_REALM_INDEX: &str = r#"{
    "_links": {"self": {"href": "https://us.api.blizzard.com/data/wow/connected-realm/?namespace=dynamic-us"}},
    "connected_realms": [
        {"href": "https://us.api.blizzard.com/data/wow/connected-realm/11?namespace=dynamic-us"},
        {"href": "https://us.api.blizzard.com/data/wow/connected-realm/12?namespace=dynamic-us"}
    ]
}"#;

pub const REALM: &str = r#"{
    "id": 11,
    "name": "Tichondrius",
    "slug": "tichondrius",
    "region": {
        "key": {"href": "https://us.api.blizzard.com/data/wow/region/1?namespace=dynamic-us"},
        "name": "North America",
        "id": 1
    },
    "category": "United States",
    "locale": "enUS",
    "timezone": "America/Los_Angeles",
    "type": {"type": "NORMAL", "name": "Normal"},
    "is_tournament": false
}"#;

pub const CONNECTED_REALM: &str = r#"{
    "id": 11,
    "has_queue": false,
    "status": {"type": "UP", "name": "Up"},
    "population": {"type": "FULL", "name": "Full"},
    "realms": [{
        "id": 11,
        "name": "Tichondrius",
        "slug": "tichondrius",
        "locale": "enUS",
        "timezone": "America/Los_Angeles",
        "type": {"type": "NORMAL", "name": "Normal"},
        "is_tournament": false
    }],
    "mythic_leaderboards": {"href": "https://us.api.blizzard.com/data/wow/connected-realm/11/mythic-leaderboard/?namespace=dynamic-us"}
}"#;

pub const MYTHIC_CHALLENGE_MODE: &str = r#"{
    "_links": {"self": {"href": "https://us.api.blizzard.com/data/wow/mythic-challenge-mode/?namespace=dynamic-us"}},
    "current_period": 641,
    "current_period_start_timestamp": 1547564400000,
    "current_period_end_timestamp": 1548169200000,
    "current_keystone_affixes": [
        {
            "keystone_affix": {"key": {"href": "https://us.api.blizzard.com/data/wow/keystone-affix/10?namespace=static-us"}, "id": 10},
            "starting_level": 2
        },
        {
            "keystone_affix": {"key": {"href": "https://us.api.blizzard.com/data/wow/keystone-affix/7?namespace=static-us"}, "id": 7}
        }
    ]
}"#;

pub const PVP_LEADERBOARD: &str = r#"{
    "rows": [{
        "ranking": 1,
        "rating": 2870,
        "name": "Player",
        "realmId": 3676,
        "realmName": "Area 52",
        "realmSlug": "area-52",
        "raceId": 10,
        "classId": 8,
        "specId": 63,
        "factionId": 1,
        "genderId": 0,
        "seasonWins": 120,
        "seasonLosses": 30,
        "weeklyWins": 12,
        "weeklyLosses": 3
    }]
}"#;

pub const USER_CHARACTERS: &str = r#"{
    "characters": [{
        "name": "Thrall",
        "realm": "Area 52",
        "battlegroup": "Vindication",
        "class": 8,
        "race": 10,
        "gender": 0,
        "level": 120,
        "achievementPoints": 12345,
        "thumbnail": "area-52/1/1-avatar.jpg"
    }]
}"#;

pub const PET_STATS: &str = r#"{
    "speciesId": 258,
    "breedId": 3,
    "petQualityId": 1,
    "level": 1,
    "health": 150,
    "power": 10,
    "speed": 8
}"#;
