//! Ingestion: QuoteEntry → Quote (TryFrom + validation).

use super::wire;
use super::{Quote, QuotePrice};
use crate::error::QuoteRejection;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<wire::QuoteEntry> for Quote {
    type Error = QuoteRejection;

    fn try_from(source: wire::QuoteEntry) -> Result<Self, Self::Error> {
        if source.currency.is_empty() {
            return Err(QuoteRejection::MissingCurrency);
        }

        let price = match &source.price {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(QuotePrice::Float)
                .ok_or_else(|| QuoteRejection::NonNumericPrice(n.to_string()))?,
            serde_json::Value::String(s) => string_price(s)?,
            other => return Err(QuoteRejection::NonNumericPrice(other.to_string())),
        };

        let quote = Quote {
            date: source.date.as_deref().and_then(|raw| parse_date(&source.currency, raw)),
            currency: source.currency.into(),
            price,
        };
        quote.validated_price()?;
        Ok(quote)
    }
}

/// Plain decimal strings stay exact; other float syntax goes through `f64`.
fn string_price(raw: &str) -> Result<QuotePrice, QuoteRejection> {
    let trimmed = raw.trim();
    if let Ok(price) = Decimal::from_str(trimmed) {
        return Ok(QuotePrice::Exact(price));
    }
    trimmed
        .parse::<f64>()
        .map(QuotePrice::Float)
        .map_err(|_| QuoteRejection::NonNumericPrice(raw.to_string()))
}

/// An unparseable date only drops the date, never the quote.
fn parse_date(currency: &str, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("Ignoring invalid date '{}' on {} quote: {}", raw, currency, e);
            None
        }
    }
}
