//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types and the pure operations over them
//! - `wire.rs` — Raw serde structs matching what the external feeds send
//! - `ingest.rs` — `TryFrom` conversions from wire types, with validation
//! - `state.rs` — State containers with update methods (owned by the app)

pub mod balance;
pub mod rate;
