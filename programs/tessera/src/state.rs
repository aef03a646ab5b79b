//! State accounts for the Tessera basket program
//! These accounts hold the batch configuration, the share ledger and the push feed

use anchor_lang::prelude::*;

use crate::constants::{MAX_COMPONENTS, MAX_TICKER_LEN};

/// One entry in the component registry
/// Membership is keyed on the identifier; the ticker is a display label
/// that removal double-checks
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
  pub identifier: Pubkey,

  pub ticker: String,
}

impl AssetEntry {
  pub const LEN: usize = 32 + // identifier
    4 + MAX_TICKER_LEN; // ticker (len prefix + bytes)
}

/// Batch state - the single source of truth for roles, registry and valuations
/// This account is a singleton (only one exists per program deployment)

#[account]
pub struct BatchState {
  /// Batch owner (admin)
  pub owner: Pubkey,

  pub manager: Pubkey,

  /// Holder of the single lock slot, default pubkey when unlocked
  pub locker: Pubkey,

  pub is_locked: bool,

  pub target_oracle: Pubkey,

  pub trading_oracle: Pubkey,

  /// Cached target value per share, 1e18 fixed point
  pub target_value: u128,

  /// Cached trading value per share, 1e18 fixed point
  pub trading_value: u128,

  pub total_supply: u128,

  pub components: Vec<AssetEntry>,

  pub bump: u8,

  pub authority_bump: u8,

  pub operation_counter: u64,

  pub _reserved: [u64; 8],
}

impl BatchState {
  pub const LEN: usize = 8 + // discriminator
    32 + // owner
    32 + // manager
    32 + // locker
    1 + // is_locked
    32 + // target_oracle
    32 + // trading_oracle
    16 + // target_value
    16 + // trading_value
    16 + // total_supply
    4 + MAX_COMPONENTS * AssetEntry::LEN + // components (vec prefix + entries)
    1 + // bump
    1 + // authority_bump
    8 + // operation_counter
    64; // _reserved
}

/// Per-holder share balance
/// One PDA per holder key; the reserve is the holder keyed by the batch state itself

#[account]
pub struct HolderAccount {
  pub owner: Pubkey,

  pub balance: u128,

  pub bump: u8,
}

impl HolderAccount {
  pub const LEN: usize = 8 + // discriminator
    32 + // owner
    16 + // balance
    1; // bump
}

/// Program-native push feed
/// An alternative to Pyth accounts for valuations sourced off-chain

#[account]
pub struct ValueFeed {
  pub authority: Pubkey,

  /// 1e18 fixed point
  pub value: u128,

  pub last_updated: i64,

  pub bump: u8,
}

impl ValueFeed {
  pub const LEN: usize = 8 + // discriminator
    32 + // authority
    16 + // value
    8 + // last_updated
    1; // bump
}

pub const BATCH_STATE_SEED: &[u8] = b"batch_state";

pub const BATCH_AUTHORITY_SEED: &[u8] = b"batch_authority";

pub const HOLDER_SEED: &[u8] = b"holder";

pub const VALUE_FEED_SEED: &[u8] = b"value_feed";
