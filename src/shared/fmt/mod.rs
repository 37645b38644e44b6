//! Human-readable formatting for display layers.

pub mod decimal;
