//! Swap asset instruction - replaces one registry entry with another
//! A single atomic step so the registry is never observed mid-rotation

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_manager};
use crate::events::AssetSwapped;
use crate::instructions::add_component::MutateRegistry;
use crate::registry;

pub fn handler(
  ctx: Context<MutateRegistry>,
  removed_identifier: Pubkey,
  added_identifier: Pubkey,
  added_ticker: String,
) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_manager(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let removed = registry::swap_asset(
    &mut batch_state.components,
    &removed_identifier,
    added_identifier,
    added_ticker.clone(),
  )?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!(
    "Asset swapped: {} ({}) -> {} ({})",
    removed.identifier,
    removed.ticker,
    added_identifier,
    added_ticker
  );

  emit!(AssetSwapped {
    added_identifier,
    added_ticker,
    removed_identifier: removed.identifier,
    removed_ticker: removed.ticker,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}
