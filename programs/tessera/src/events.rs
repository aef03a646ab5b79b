use anchor_lang::prelude::*;

#[event]
pub struct BatchInitialized {
  pub owner: Pubkey,
  pub manager: Pubkey,
  pub target_oracle: Pubkey,
  pub trading_oracle: Pubkey,
  pub component_count: u64,
  pub timestamp: i64,
}

#[event]
pub struct ManagerChanged {
  pub old_manager: Pubkey,
  pub new_manager: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct OwnerChanged {
  pub old_owner: Pubkey,
  pub new_owner: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct TargetOracleUpdated {
  pub old_oracle: Pubkey,
  pub new_oracle: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct TradingOracleUpdated {
  pub old_oracle: Pubkey,
  pub new_oracle: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct BatchLocked {
  pub locker: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct BatchUnlocked {
  pub locker: Pubkey,
  pub timestamp: i64,
}

#[event]
pub struct ComponentAdded {
  pub identifier: Pubkey,
  pub ticker: String,
  pub component_count: u64,
  pub timestamp: i64,
}

#[event]
pub struct ComponentRemoved {
  pub identifier: Pubkey,
  pub ticker: String,
  pub component_count: u64,
  pub timestamp: i64,
}

#[event]
pub struct AssetSwapped {
  pub added_identifier: Pubkey,
  pub added_ticker: String,
  pub removed_identifier: Pubkey,
  pub removed_ticker: String,
  pub timestamp: i64,
}

#[event]
pub struct Minted {
  pub to: Pubkey,
  pub quantity: u128,
  pub new_total_supply: u128,
  pub timestamp: i64,
}

#[event]
pub struct Burned {
  pub from: Pubkey,
  pub quantity: u128,
  pub new_total_supply: u128,
  pub timestamp: i64,
}

#[event]
pub struct Transferred {
  pub from: Pubkey,
  pub to: Pubkey,
  pub quantity: u128,
  pub timestamp: i64,
}

#[event]
pub struct TargetValueRefreshed {
  pub oracle: Pubkey,
  pub old_value: u128,
  pub new_value: u128,
  pub timestamp: i64,
}

#[event]
pub struct TradingValueRefreshed {
  pub oracle: Pubkey,
  pub old_value: u128,
  pub new_value: u128,
  pub timestamp: i64,
}

#[event]
pub struct SupplyAdjusted {
  pub trading_value: u128,
  pub target_value: u128,
  pub old_total_supply: u128,
  pub new_total_supply: u128,
  pub old_reserve_balance: u128,
  pub new_reserve_balance: u128,
  pub timestamp: i64,
}

#[event]
pub struct Invoked {
  pub caller: Pubkey,
  pub target: Pubkey,
  pub value: u64,
  pub data: Vec<u8>,
  pub response: Vec<u8>,
  pub timestamp: i64,
}

#[event]
pub struct ValueFeedUpdated {
  pub feed: Pubkey,
  pub old_value: u128,
  pub new_value: u128,
  pub timestamp: i64,
}
