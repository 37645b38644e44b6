//! Rate domain — quote ingestion, rate table, amount conversion.

mod ingest;
pub mod state;
pub mod wire;

pub use state::AmountPair;

use crate::error::QuoteRejection;
use crate::shared::{round_half_away, CurrencyCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decimal places kept on a converted amount.
pub const CONVERSION_DECIMALS: u32 = 2;

/// A quote price as it arrived: a feed float, or an exact decimal parsed from
/// a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuotePrice {
    Float(f64),
    Exact(Decimal),
}

impl From<f64> for QuotePrice {
    fn from(price: f64) -> Self {
        Self::Float(price)
    }
}

impl From<Decimal> for QuotePrice {
    fn from(price: Decimal) -> Self {
        Self::Exact(price)
    }
}

/// One price feed entry: a currency and its price per unit, expressed in the
/// feed's common reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub currency: CurrencyCode,
    pub price: QuotePrice,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn new(currency: impl Into<CurrencyCode>, price: impl Into<QuotePrice>) -> Self {
        Self {
            currency: currency.into(),
            price: price.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// The price as a validated, strictly positive `Decimal`.
    pub fn validated_price(&self) -> Result<Decimal, QuoteRejection> {
        if self.currency.is_empty() {
            return Err(QuoteRejection::MissingCurrency);
        }
        match self.price {
            QuotePrice::Exact(price) if price <= Decimal::ZERO => {
                Err(QuoteRejection::NonPositivePrice(price))
            }
            QuotePrice::Exact(price) => Ok(price),
            QuotePrice::Float(price) => float_price(price),
        }
    }
}

/// Sign and range are checked on the float, so a tiny positive price that
/// `Decimal` would flush to zero is reported as out of range.
fn float_price(price: f64) -> Result<Decimal, QuoteRejection> {
    if !price.is_finite() {
        return Err(QuoteRejection::NonFinitePrice(price));
    }
    if price <= 0.0 {
        return Err(match Decimal::try_from(price) {
            Ok(d) => QuoteRejection::NonPositivePrice(d),
            Err(_) => QuoteRejection::PriceOutOfRange(price),
        });
    }
    match Decimal::try_from(price) {
        Ok(d) if d > Decimal::ZERO => Ok(d),
        _ => Err(QuoteRejection::PriceOutOfRange(price)),
    }
}

// ─── RateTable ───────────────────────────────────────────────────────────────

/// Deduplicated currency → price mapping.
///
/// Iteration follows the order in which each currency was first accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    entries: Vec<(CurrencyCode, Decimal)>,
    index: HashMap<CurrencyCode, usize>,
    as_of: Option<DateTime<Utc>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw feed entries, validating each one first.
    ///
    /// Report indices refer to positions in `entries`.
    pub fn from_feed(entries: Vec<wire::QuoteEntry>) -> RateTableReport {
        let mut rejected = Vec::new();
        let mut quotes = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let currency = CurrencyCode::from(entry.currency.as_str());
            match Quote::try_from(entry) {
                Ok(quote) => quotes.push((index, quote)),
                Err(reason) => rejected.push(RejectedQuote {
                    index,
                    currency,
                    reason,
                }),
            }
        }

        let mut report = build_indexed(quotes.iter().map(|(i, q)| (*i, q)));
        rejected.append(&mut report.rejected);
        rejected.sort_by_key(|r| r.index);
        report.rejected = rejected;
        warn_rejected(&report);
        report
    }

    /// Price of `currency`, if present.
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.index.get(currency).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.index.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currency codes in first-occurrence order (for selection lists).
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.entries.iter().map(|(code, _)| code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.entries.iter().map(|(code, price)| (code, *price))
    }

    /// Latest quote date among the accepted quotes.
    pub fn as_of(&self) -> Option<DateTime<Utc>> {
        self.as_of
    }

    /// Units of `to` obtained for one unit of `from`, unrounded.
    pub fn cross_rate(&self, from: &str, to: &str) -> Option<Decimal> {
        let from_price = self.get(from)?;
        let to_price = self.get(to)?;
        from_price.checked_div(to_price)
    }

    /// Insert if absent. Returns `false` when the currency was already present.
    fn insert_first(&mut self, currency: CurrencyCode, price: Decimal) -> bool {
        if self.index.contains_key(&currency) {
            return false;
        }
        self.index.insert(currency.clone(), self.entries.len());
        self.entries.push((currency, price));
        true
    }
}

/// A quote refused during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedQuote {
    pub index: usize,
    pub currency: CurrencyCode,
    pub reason: QuoteRejection,
}

/// Outcome of building a rate table: the table plus what was left out of it.
#[derive(Debug, Clone, Default)]
pub struct RateTableReport {
    pub table: RateTable,
    pub rejected: Vec<RejectedQuote>,
    /// Valid quotes dropped because an earlier quote had the same currency.
    pub duplicates: usize,
}

impl RateTableReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn into_table(self) -> RateTable {
        self.table
    }
}

/// Build a rate table keeping the first valid quote of each currency.
///
/// Quotes with an empty currency, a non-finite price or a price `<= 0` are
/// reported in `rejected` and never occupy a slot; a later valid quote for the
/// same currency is then the one kept.
pub fn build_rate_table(quotes: &[Quote]) -> RateTableReport {
    let report = build_indexed(quotes.iter().enumerate());
    warn_rejected(&report);
    report
}

fn build_indexed<'a>(quotes: impl Iterator<Item = (usize, &'a Quote)>) -> RateTableReport {
    let mut report = RateTableReport::default();

    for (index, quote) in quotes {
        let price = match quote.validated_price() {
            Ok(price) => price,
            Err(reason) => {
                report.rejected.push(RejectedQuote {
                    index,
                    currency: quote.currency.clone(),
                    reason,
                });
                continue;
            }
        };

        if report.table.insert_first(quote.currency.clone(), price) {
            if let Some(date) = quote.date {
                report.table.as_of = Some(report.table.as_of.map_or(date, |d| d.max(date)));
            }
        } else {
            tracing::debug!("Dropping duplicate quote for {} at index {}", quote.currency, index);
            report.duplicates += 1;
        }
    }

    report
}

fn warn_rejected(report: &RateTableReport) {
    if !report.rejected.is_empty() {
        tracing::warn!(
            "Rejected {} malformed quote(s), kept {} currencies",
            report.rejected.len(),
            report.table.len()
        );
    }
}

// ─── Conversion ──────────────────────────────────────────────────────────────

/// Result of a conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Newly derived amount for the dependent field.
    Value(Decimal),
    /// Leave the dependent field as it is.
    NoOp(NoOpReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    MissingAmount,
    MissingCurrency,
    UnknownCurrency(CurrencyCode),
    Overflow,
}

impl Conversion {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Conversion::Value(v) => Some(*v),
            Conversion::NoOp(_) => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Conversion::NoOp(_))
    }

    /// The new value, or `current` untouched on `NoOp`.
    pub fn or_keep(self, current: Option<Decimal>) -> Option<Decimal> {
        match self {
            Conversion::Value(v) => Some(v),
            Conversion::NoOp(_) => current,
        }
    }
}

/// Convert `amount` of `from` into `to` using the prices in `table`.
///
/// Table prices are per unit in the reference currency, so a pricier `from`
/// yields more units of `to`.
///
/// ```text
/// result = round_2dp(amount * price[from] / price[to])
/// ```
///
/// Missing or zero amounts, missing currencies and currencies absent from the
/// table all yield `NoOp`. Identical currencies return `amount` as given.
pub fn convert(
    amount: Option<Decimal>,
    from: Option<&str>,
    to: Option<&str>,
    table: &RateTable,
) -> Conversion {
    let conversion = convert_inner(amount, from, to, table);
    if let Conversion::NoOp(reason) = &conversion {
        tracing::trace!("Conversion {:?} -> {:?} skipped: {:?}", from, to, reason);
    }
    conversion
}

fn convert_inner(
    amount: Option<Decimal>,
    from: Option<&str>,
    to: Option<&str>,
    table: &RateTable,
) -> Conversion {
    let amount = match amount {
        Some(a) if !a.is_zero() => a,
        _ => return Conversion::NoOp(NoOpReason::MissingAmount),
    };

    let (from, to) = match (from, to) {
        (Some(f), Some(t)) if !f.is_empty() && !t.is_empty() => (f, t),
        _ => return Conversion::NoOp(NoOpReason::MissingCurrency),
    };

    let Some(from_price) = table.get(from) else {
        return Conversion::NoOp(NoOpReason::UnknownCurrency(from.into()));
    };
    let Some(to_price) = table.get(to) else {
        return Conversion::NoOp(NoOpReason::UnknownCurrency(to.into()));
    };

    if from == to {
        return Conversion::Value(amount);
    }

    match amount
        .checked_mul(from_price)
        .and_then(|v| v.checked_div(to_price))
    {
        Some(v) => Conversion::Value(round_half_away(v, CONVERSION_DECIMALS)),
        None => Conversion::NoOp(NoOpReason::Overflow),
    }
}
