//! Set manager instruction - rotates the manager role

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_manager};
use crate::events::ManagerChanged;
use crate::state::*;

pub fn handler(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_manager(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let old_manager = batch_state.manager;
  batch_state.manager = new_manager;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Manager changed: {} -> {}", old_manager, new_manager);

  emit!(ManagerChanged {
    old_manager,
    new_manager,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct SetManager<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
