//! Remove component instruction - drops one entry from the registry

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_manager};
use crate::events::ComponentRemoved;
use crate::instructions::add_component::MutateRegistry;
use crate::registry;

pub fn handler(ctx: Context<MutateRegistry>, identifier: Pubkey, ticker: String) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_manager(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let removed = registry::remove_component(&mut batch_state.components, &identifier, &ticker)?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Component removed: {} ({})", removed.identifier, removed.ticker);
  msg!("Registry size: {}", batch_state.components.len());

  emit!(ComponentRemoved {
    identifier: removed.identifier,
    ticker: removed.ticker,
    component_count: batch_state.components.len() as u64,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}
