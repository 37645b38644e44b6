//! Balance domain — chain priorities, wallet balances, ranked display rows.

mod blockchain;
pub mod rank;

pub use blockchain::{priority_of, Blockchain, UNRANKED_PRIORITY};
pub use rank::{rank, rank_with, total_usd_value, RankConfig};

use crate::shared::{serde_util, CurrencyCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A token balance held on one chain, as reported by the balance source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: CurrencyCode,
    /// Missing amounts deserialize as zero and are filtered out by ranking.
    #[serde(default, deserialize_with = "serde_util::decimal_lenient::deserialize")]
    pub amount: Decimal,
    pub blockchain: Blockchain,
}

impl WalletBalance {
    pub fn new(currency: impl Into<CurrencyCode>, amount: Decimal, blockchain: Blockchain) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain,
        }
    }
}

/// A balance that survived filtering, ready to render as a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBalance {
    pub currency: CurrencyCode,
    pub amount: Decimal,
    pub blockchain: Blockchain,
    pub priority: i32,
    pub usd_value: Decimal,
    pub formatted_amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wallet_balance_from_json() {
        let json = r#"[
            {"currency": "OSMO", "amount": 5.25, "blockchain": "Osmosis"},
            {"currency": "ETH", "amount": "0.5", "blockchain": "Ethereum"},
            {"currency": "BTC", "blockchain": "Bitcoin"}
        ]"#;
        let balances: Vec<WalletBalance> = serde_json::from_str(json).unwrap();
        assert_eq!(balances[0].amount, Decimal::from_str("5.25").unwrap());
        assert_eq!(balances[1].amount, Decimal::from_str("0.5").unwrap());
        assert_eq!(balances[1].blockchain, Blockchain::Ethereum);
        assert_eq!(balances[2].amount, Decimal::ZERO);
        assert_eq!(balances[2].blockchain, Blockchain::Unknown("Bitcoin".to_string()));
    }
}
