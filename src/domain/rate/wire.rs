//! Wire types for the price feed document.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// One raw entry of the price feed, e.g.
/// `{"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93}`.
///
/// `price` is kept untyped: the feed is not trusted to always send numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteEntry {
    pub currency: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub price: serde_json::Value,
}

/// Parse the price feed document (a JSON array of entries).
pub fn parse_feed(json: &str) -> Result<Vec<QuoteEntry>, Error> {
    Ok(serde_json::from_str(json)?)
}
