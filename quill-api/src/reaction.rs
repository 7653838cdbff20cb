use std::{fmt, str::FromStr};

use crate::{Error, UserId};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionType {
    Like,
    Love,
    Haha,
    Sad,
    Angry,
}

impl ReactionType {
    /// Display order of the reaction picker
    pub const ALL: [ReactionType; 5] = [
        ReactionType::Like,
        ReactionType::Love,
        ReactionType::Haha,
        ReactionType::Sad,
        ReactionType::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Like => "LIKE",
            ReactionType::Love => "LOVE",
            ReactionType::Haha => "HAHA",
            ReactionType::Sad => "SAD",
            ReactionType::Angry => "ANGRY",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<ReactionType, Error> {
        ReactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownReactionType(String::from(s)))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: ReactionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_type_names() {
        assert_eq!("HAHA".parse::<ReactionType>(), Ok(ReactionType::Haha));
        assert_eq!(
            "WOW".parse::<ReactionType>(),
            Err(Error::UnknownReactionType(String::from("WOW")))
        );
        let r = Reaction {
            user_id: UserId::stub(),
            kind: ReactionType::Angry,
        };
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            serde_json::json!({
                "userId": "ffffffff-ffff-ffff-ffff-ffffffffffff",
                "type": "ANGRY",
            })
        );
    }
}
