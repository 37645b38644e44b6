//! Balance ranking: filter, stable priority sort, USD valuation, formatting.

use super::{RankedBalance, WalletBalance, UNRANKED_PRIORITY};
use crate::domain::rate::RateTable;
use crate::error::Error;
use crate::shared::fmt::decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest number of decimal places a `Decimal` can carry.
pub const MAX_DECIMALS: u32 = 28;

/// Formatting options for ranked rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Fractional digits in `formatted_amount`.
    pub decimals: u32,
    /// Insert `,` thousands separators in `formatted_amount`.
    pub group_thousands: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            group_thousands: false,
        }
    }
}

impl RankConfig {
    /// Whole-number amounts, matching wallet pages that rendered `amount.toFixed()`.
    pub fn legacy() -> Self {
        Self {
            decimals: 0,
            group_thousands: false,
        }
    }

    /// Load from a JSON object; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: RankConfig = serde_json::from_str(json)?;
        if config.decimals > MAX_DECIMALS {
            return Err(Error::Validation(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, config.decimals
            )));
        }
        Ok(config)
    }

    fn format(&self, amount: &Decimal) -> String {
        let decimals = self.decimals.min(MAX_DECIMALS);
        if self.group_thousands {
            decimal::fixed_grouped(amount, decimals)
        } else {
            decimal::fixed(amount, decimals)
        }
    }
}

/// Rank balances with the default [`RankConfig`].
pub fn rank(balances: &[WalletBalance], prices: &RateTable) -> Vec<RankedBalance> {
    rank_with(balances, prices, &RankConfig::default())
}

/// Keep balances on ranked chains with a positive amount, order them by chain
/// priority (highest first, ties in input order) and price them in USD.
///
/// A currency missing from `prices` is valued at zero.
pub fn rank_with(
    balances: &[WalletBalance],
    prices: &RateTable,
    config: &RankConfig,
) -> Vec<RankedBalance> {
    let mut kept: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .map(|b| (b.blockchain.priority(), b))
        .filter(|(priority, b)| *priority > UNRANKED_PRIORITY && b.amount > Decimal::ZERO)
        .collect();

    // `sort_by` is stable.
    kept.sort_by(|(left, _), (right, _)| right.cmp(left));

    tracing::debug!("Ranked {} of {} balance(s)", kept.len(), balances.len());

    kept.into_iter()
        .map(|(priority, balance)| RankedBalance {
            currency: balance.currency.clone(),
            amount: balance.amount,
            blockchain: balance.blockchain.clone(),
            priority,
            usd_value: usd_value(balance, prices),
            formatted_amount: config.format(&balance.amount),
        })
        .collect()
}

fn usd_value(balance: &WalletBalance, prices: &RateTable) -> Decimal {
    let price = prices.get(balance.currency.as_str()).unwrap_or(Decimal::ZERO);
    price.checked_mul(balance.amount).unwrap_or_else(|| {
        tracing::warn!(
            "USD value overflow for {} {}, using 0",
            balance.amount,
            balance.currency
        );
        Decimal::ZERO
    })
}

/// Sum of the USD values of ranked rows.
pub fn total_usd_value(rows: &[RankedBalance]) -> Decimal {
    rows.iter()
        .fold(Decimal::ZERO, |acc, row| acc.saturating_add(row.usd_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::Blockchain;
    use crate::domain::rate::{build_rate_table, Quote};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn balance(currency: &str, amount: &str, chain: &str) -> WalletBalance {
        WalletBalance::new(currency, dec(amount), Blockchain::parse(chain))
    }

    fn prices() -> RateTable {
        build_rate_table(&[
            Quote::new("OSMO", 0.5),
            Quote::new("ARB", 1.25),
            Quote::new("ETH", 2000.0),
        ])
        .into_table()
    }

    #[test]
    fn test_rank_worked_example() {
        let balances = vec![
            balance("BTC", "1", "Unknown"),
            balance("OSMO", "5", "Osmosis"),
            balance("ETH", "0", "Ethereum"),
            balance("ARB", "2", "Arbitrum"),
        ];
        let rows = rank(&balances, &prices());
        let currencies: Vec<&str> = rows.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(currencies, vec!["OSMO", "ARB"]);
        assert_eq!(rows[0].priority, 100);
        assert_eq!(rows[0].usd_value, dec("2.5"));
        assert_eq!(rows[0].formatted_amount, "5.00");
        assert_eq!(rows[1].priority, 30);
        assert_eq!(rows[1].usd_value, dec("2.5"));
    }

    #[test]
    fn test_rank_excludes_unranked_and_non_positive() {
        let balances = vec![
            balance("ETH", "-1", "Ethereum"),
            balance("SOL", "10", "Solana"),
            balance("NEO", "0.000", "Neo"),
            balance("ZIL", "3", "Zilliqa"),
        ];
        let rows = rank(&balances, &prices());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].currency.as_str(), "ZIL");
        assert!(rows
            .iter()
            .all(|r| r.amount > Decimal::ZERO && r.priority != UNRANKED_PRIORITY));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let balances = vec![
            balance("NEO", "1", "Neo"),
            balance("ZIL", "1", "Zilliqa"),
            balance("GAS", "1", "Neo"),
            balance("OSMO", "1", "Osmosis"),
            balance("XSGD", "1", "Zilliqa"),
        ];
        let rows = rank(&balances, &prices());
        let currencies: Vec<&str> = rows.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(currencies, vec!["OSMO", "NEO", "ZIL", "GAS", "XSGD"]);
    }

    #[test]
    fn test_rank_missing_price_values_zero() {
        let rows = rank(&[balance("ATOM", "4", "Osmosis")], &prices());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].usd_value, Decimal::ZERO);
    }

    #[test]
    fn test_rank_usd_overflow_values_zero() {
        let balances = vec![
            WalletBalance::new("ETH", Decimal::MAX, Blockchain::Ethereum),
            balance("OSMO", "5", "Osmosis"),
        ];
        let rows = rank(&balances, &prices());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].currency.as_str(), "ETH");
        assert_eq!(rows[1].amount, Decimal::MAX);
        assert_eq!(rows[1].usd_value, Decimal::ZERO);
        assert_eq!(total_usd_value(&rows), dec("2.5"));
    }

    #[test]
    fn test_rank_formatting_options() {
        let balances = vec![balance("ETH", "1234.5678", "Ethereum")];
        let rows = rank_with(&balances, &prices(), &RankConfig::legacy());
        assert_eq!(rows[0].formatted_amount, "1235");

        let grouped = RankConfig {
            decimals: 3,
            group_thousands: true,
        };
        let rows = rank_with(&balances, &prices(), &grouped);
        assert_eq!(rows[0].formatted_amount, "1,234.568");
    }

    #[test]
    fn test_rank_config_from_json() {
        assert_eq!(RankConfig::from_json("{}").unwrap(), RankConfig::default());
        let config = RankConfig::from_json(r#"{"decimals": 4}"#).unwrap();
        assert_eq!(config.decimals, 4);
        assert!(!config.group_thousands);
        assert!(matches!(
            RankConfig::from_json(r#"{"decimals": 40}"#),
            Err(Error::Validation(_))
        ));
        assert!(matches!(RankConfig::from_json("42"), Err(Error::Serde(_))));
    }

    #[test]
    fn test_total_usd_value() {
        let balances = vec![
            balance("OSMO", "5", "Osmosis"),
            balance("ETH", "0.5", "Ethereum"),
            balance("ATOM", "4", "Osmosis"),
        ];
        let rows = rank(&balances, &prices());
        assert_eq!(total_usd_value(&rows), dec("1002.5"));
        assert_eq!(total_usd_value(&[]), Decimal::ZERO);
    }
}
