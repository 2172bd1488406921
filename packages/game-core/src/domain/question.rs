//! Question types: answer keys, lifeline kinds, and per-question help records.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::DomainError;

/// One of the four answer option letters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// All keys in display order.
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerKey::A => "a",
            AnswerKey::B => "b",
            AnswerKey::C => "c",
            AnswerKey::D => "d",
        }
    }

    /// Position in option arrays (0..=3).
    pub fn index(self) -> usize {
        match self {
            AnswerKey::A => 0,
            AnswerKey::B => 1,
            AnswerKey::C => 2,
            AnswerKey::D => 3,
        }
    }
}

impl TryFrom<&str> for AnswerKey {
    type Error = DomainError;

    /// Exact match required: only the lowercase letters `a`..`d` are keys.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "a" => Ok(AnswerKey::A),
            "b" => Ok(AnswerKey::B),
            "c" => Ok(AnswerKey::C),
            "d" => Ok(AnswerKey::D),
            _ => Err(DomainError::InvalidAnswerKey(s.to_string())),
        }
    }
}

// AnswerKey serde: canonical lowercase letter strings
impl Serialize for AnswerKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnswerKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AnswerKey::try_from(s.as_str())
            .map_err(|_| serde::de::Error::custom(format!("Invalid answer key: {s}")))
    }
}

/// Lifeline kinds, each usable once per session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HelpKind {
    AudienceHelp,
    FiftyFifty,
}

impl HelpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HelpKind::AudienceHelp => "audience_help",
            HelpKind::FiftyFifty => "fifty_fifty",
        }
    }
}

impl TryFrom<&str> for HelpKind {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "audience_help" => Ok(HelpKind::AudienceHelp),
            "fifty_fifty" => Ok(HelpKind::FiftyFifty),
            _ => Err(DomainError::UnknownHelp(s.to_string())),
        }
    }
}

// HelpKind serde: canonical snake_case names
impl Serialize for HelpKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HelpKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HelpKind::try_from(s.as_str())
            .map_err(|_| serde::de::Error::custom(format!("Invalid help kind: {s}")))
    }
}

/// Simulated audience vote: a percentage per key, summing to 100.
///
/// Stored indexed by `AnswerKey::index`; serialized as a map keyed by the
/// letter strings (`{"a": 12, "b": 61, ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceVote(pub [u8; 4]);

impl AudienceVote {
    pub fn percent_for(&self, key: AnswerKey) -> u8 {
        self.0[key.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&p| p as u32).sum()
    }
}

impl Serialize for AudienceVote {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        for key in AnswerKey::ALL {
            map.serialize_entry(key.as_str(), &self.0[key.index()])?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AudienceVote {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = std::collections::BTreeMap::<String, u8>::deserialize(deserializer)?;
        let mut percents = [0u8; 4];
        for key in AnswerKey::ALL {
            let percent = raw.get(key.as_str()).ok_or_else(|| {
                serde::de::Error::custom(format!("Missing vote for key: {}", key.as_str()))
            })?;
            percents[key.index()] = *percent;
        }
        Ok(AudienceVote(percents))
    }
}

/// Fifty-fifty outcome: the two keys left on the board, in display order.
/// Always contains the correct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiftyFifty(pub [AnswerKey; 2]);

impl FiftyFifty {
    pub fn contains(&self, key: AnswerKey) -> bool {
        self.0.contains(&key)
    }
}

/// Lifeline output attached to the question it was used on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_vote: Option<AudienceVote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fifty_fifty: Option<FiftyFifty>,
}

impl HelpRecord {
    pub fn is_empty(&self) -> bool {
        self.audience_vote.is_none() && self.fifty_fifty.is_none()
    }
}

/// A single ladder question with its four options and correct key.
///
/// Content is immutable once assigned to a session; only the help record may
/// gain entries, through `use_help` on the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameQuestion {
    pub text: String,
    /// Option bodies indexed by `AnswerKey::index`.
    pub options: [String; 4],
    pub correct: AnswerKey,
    #[serde(default, skip_serializing_if = "HelpRecord::is_empty")]
    pub help: HelpRecord,
}

impl GameQuestion {
    pub fn new(text: String, options: [String; 4], correct: AnswerKey) -> Self {
        Self {
            text,
            options,
            correct,
            help: HelpRecord::default(),
        }
    }

    pub fn option(&self, key: AnswerKey) -> &str {
        &self.options[key.index()]
    }

    pub fn is_correct(&self, key: AnswerKey) -> bool {
        self.correct == key
    }
}
