//! Program-wide constants
//! Centralized location for all configuration values

// PRECISION CONSTANTS
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000; // 1e18 fixed point

// REGISTRY BOUNDS
pub const MAX_COMPONENTS: usize = 16;   // account space is pre-allocated for this many
pub const MAX_TICKER_LEN: usize = 10;   // byte length, not chars
