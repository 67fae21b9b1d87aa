//! Data-transfer models mirroring Battle.net JSON responses

pub mod auth;
pub mod common;
pub mod sc2;
pub mod wow;

pub use auth::{Access, TokenInfo, UserInfo};
pub use common::{KeyLink, Link, LocalizedString, SelfLink, TypeName};

#[cfg(test)]
mod tests {
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use std::fmt::Debug;

    use super::wow::{
        CharactersResult, ConnectedRealm, ConnectedRealmIndex, MythicChallengeMode, PetStats,
        PvpLeaderboard, Realm,
    };
    use super::{Access, TokenInfo};
    use crate::testutil::fixtures;

    /// Decodes `json`, re-encodes it and checks the second decode is identical
    fn round_trip<T>(json: &str)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let first: T = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&first).unwrap();
        let second: T = serde_json::from_str(&encoded).unwrap();

        assert_eq!(second, first);
    }

    #[test]
    fn fixtures_round_trip() {
        let cases: [(&str, fn(&str), &str); 10] = [
            ("access", round_trip::<Access>, fixtures::ACCESS),
            ("user access", round_trip::<Access>, fixtures::USER_ACCESS),
            ("token info", round_trip::<TokenInfo>, fixtures::TOKEN_INFO),
            (
                "connected realm index",
                round_trip::<ConnectedRealmIndex>,
                fixtures::CONNECTED_REALM_INDEX,
            ),
            ("connected realm", round_trip::<ConnectedRealm>, fixtures::CONNECTED_REALM),
            ("realm", round_trip::<Realm>, fixtures::REALM),
            (
                "mythic challenge mode",
                round_trip::<MythicChallengeMode>,
                fixtures::MYTHIC_CHALLENGE_MODE,
            ),
            ("pvp leaderboard", round_trip::<PvpLeaderboard>, fixtures::PVP_LEADERBOARD),
            ("characters", round_trip::<CharactersResult>, fixtures::USER_CHARACTERS),
            ("pet stats", round_trip::<PetStats>, fixtures::PET_STATS),
        ];

        for (name, check, json) in cases {
            println!("round trip: {name}");
            check(json);
        }
    }
}
