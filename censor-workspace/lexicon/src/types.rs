use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LexiconError;

/// Severity class of a dictionary entry.
///
/// The numeric id is the stable key used in TOML dictionaries, config files,
/// and on the command line. It carries no ordering meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Tier {
    Slurs = 1,
    CommonProfanity = 2,
    SexualTerms = 3,
    PossiblyOffensive = 4,
    UserAdded = 5,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Slurs,
        Tier::CommonProfanity,
        Tier::SexualTerms,
        Tier::PossiblyOffensive,
        Tier::UserAdded,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based slot, for fixed-size per-tier tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Slurs => "slurs",
            Tier::CommonProfanity => "common_profanity",
            Tier::SexualTerms => "sexual_terms",
            Tier::PossiblyOffensive => "possibly_offensive",
            Tier::UserAdded => "user_added",
        }
    }
}

impl TryFrom<i64> for Tier {
    type Error = LexiconError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Tier::Slurs),
            2 => Ok(Tier::CommonProfanity),
            3 => Ok(Tier::SexualTerms),
            4 => Ok(Tier::PossiblyOffensive),
            5 => Ok(Tier::UserAdded),
            other => Err(LexiconError::InvalidTier(other)),
        }
    }
}

impl From<Tier> for i64 {
    fn from(tier: Tier) -> Self {
        tier.id() as i64
    }
}

/// Accepts the numeric id (`"4"`) or the name in snake or kebab case
/// (`"possibly_offensive"`, `"Possibly-Offensive"`).
impl FromStr for Tier {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Tier::try_from(id);
        }
        let wanted = s.to_ascii_lowercase().replace('-', "_");
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| LexiconError::UnknownTierName(s.to_string()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
