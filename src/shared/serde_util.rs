//! Custom serde helpers for feed wire formats.

/// Deserializes a `Decimal` from either a JSON number or a decimal string.
///
/// Balance sources send amounts as plain JSON numbers (`5.25`), some send
/// strings (`"5.25"`). `rust_decimal`'s `serde-str` mode only accepts the latter.
pub mod decimal_lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Decimal::try_from(n)
                .map_err(|e| serde::de::Error::custom(format!("Invalid amount {}: {}", n, e))),
            NumberOrString::String(s) => Decimal::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid amount '{}': {}", s, e))),
        }
    }
}
