//! # wallet-swap-core
//!
//! Pure, synchronous core of a currency swap form and a wallet balance list.
//!
//! ## Architecture
//!
//! Two independent components, both plain functions over caller-owned data:
//!
//! 1. **Rate** — build a deduplicated price table from a quote feed, convert
//!    amounts between currencies, keep a swap form's two amount fields in sync
//! 2. **Balance** — filter wallet balances by chain priority and amount, sort
//!    them stably by priority, attach a USD value and a formatted amount
//!
//! Fetching quotes or balances, form binding and rendering all belong to the
//! host application.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wallet_swap_core::prelude::*;
//!
//! let report = RateTable::from_feed(parse_feed(&feed_json)?);
//! let table = report.table;
//!
//! let pair = AmountPair::default().with_from_amount(Some(amount), &table);
//! let pair = pair.swap(&table);
//!
//! let rows = rank(&balances, &table);
//! ```

/// Shared newtypes, rounding and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified crate error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CurrencyCode;

    // Domain types — rate
    pub use crate::domain::rate::wire::{parse_feed, QuoteEntry};
    pub use crate::domain::rate::{
        build_rate_table, convert, Conversion, NoOpReason, Quote, QuotePrice, RateTable,
        RateTableReport, RejectedQuote, CONVERSION_DECIMALS,
    };

    // Domain types — balance
    pub use crate::domain::balance::{
        priority_of, rank, rank_with, total_usd_value, Blockchain, RankConfig, RankedBalance,
        WalletBalance, UNRANKED_PRIORITY,
    };

    // Errors
    pub use crate::error::{Error, PairValidationError, QuoteRejection};

    // State containers
    pub use crate::domain::rate::state::AmountPair;
}
