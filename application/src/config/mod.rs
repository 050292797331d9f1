//! Application-level configuration.
//!
//! - [`TurnParams`]: how a single turn polls and what it fetches afterwards

pub mod turn_params;

pub use turn_params::TurnParams;
