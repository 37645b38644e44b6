//! Chain tags and their display priority.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Priority of every chain not in the priority table.
pub const UNRANKED_PRIORITY: i32 = -99;

/// Chain a balance lives on.
///
/// Tags are matched case-sensitively against the canonical names; anything
/// else is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Unknown(String),
}

impl Blockchain {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Osmosis" => Self::Osmosis,
            "Ethereum" => Self::Ethereum,
            "Arbitrum" => Self::Arbitrum,
            "Zilliqa" => Self::Zilliqa,
            "Neo" => Self::Neo,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Osmosis => "Osmosis",
            Self::Ethereum => "Ethereum",
            Self::Arbitrum => "Arbitrum",
            Self::Zilliqa => "Zilliqa",
            Self::Neo => "Neo",
            Self::Unknown(tag) => tag,
        }
    }

    /// Display/sort priority; higher ranks first.
    pub fn priority(&self) -> i32 {
        match self {
            Self::Osmosis => 100,
            Self::Ethereum => 50,
            Self::Arbitrum => 30,
            Self::Zilliqa => 20,
            Self::Neo => 20,
            Self::Unknown(_) => UNRANKED_PRIORITY,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.priority() > UNRANKED_PRIORITY
    }
}

/// Priority of a raw chain tag.
pub fn priority_of(tag: &str) -> i32 {
    Blockchain::parse(tag).priority()
}

impl std::fmt::Display for Blockchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Blockchain {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for Blockchain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Blockchain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Blockchain::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_table() {
        assert_eq!(priority_of("Osmosis"), 100);
        assert_eq!(priority_of("Ethereum"), 50);
        assert_eq!(priority_of("Arbitrum"), 30);
        assert_eq!(priority_of("Zilliqa"), 20);
        assert_eq!(priority_of("Neo"), 20);
    }

    #[test]
    fn test_unknown_tags_are_unranked() {
        assert_eq!(priority_of("Unknown"), UNRANKED_PRIORITY);
        assert_eq!(priority_of("osmosis"), UNRANKED_PRIORITY);
        assert_eq!(priority_of(""), UNRANKED_PRIORITY);
        assert!(!Blockchain::parse("Solana").is_ranked());
        assert!(Blockchain::Neo.is_ranked());
    }

    #[test]
    fn test_blockchain_serde() {
        let chain: Blockchain = serde_json::from_str("\"Arbitrum\"").unwrap();
        assert_eq!(chain, Blockchain::Arbitrum);
        let other: Blockchain = serde_json::from_str("\"Solana\"").unwrap();
        assert_eq!(other, Blockchain::Unknown("Solana".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Solana\"");
        assert_eq!(serde_json::to_string(&Blockchain::Neo).unwrap(), "\"Neo\"");
    }
}
