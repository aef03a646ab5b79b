//! Add component instruction - appends one entry to the registry

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_manager};
use crate::events::ComponentAdded;
use crate::registry;
use crate::state::*;

pub fn handler(ctx: Context<MutateRegistry>, identifier: Pubkey, ticker: String) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_manager(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  registry::add_component(&mut batch_state.components, identifier, ticker.clone())?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Component added: {} ({})", identifier, ticker);
  msg!("Registry size: {}", batch_state.components.len());

  emit!(ComponentAdded {
    identifier,
    ticker,
    component_count: batch_state.components.len() as u64,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct MutateRegistry<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
