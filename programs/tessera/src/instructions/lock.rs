//! Lock and unlock instructions
//! Thin handlers over the in-place lock transitions

use anchor_lang::prelude::*;

use crate::auth::require_manager;
use crate::events::{BatchLocked, BatchUnlocked};
use crate::lock::{lock_in_place, unlock_in_place};
use crate::state::*;

pub fn lock(ctx: Context<LockBatch>) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  // only the manager may take the lock slot; the signer becomes the locker
  require_manager(batch_state, &caller)?;
  lock_in_place(batch_state, &caller)?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Batch locked by {}", caller);

  emit!(BatchLocked {
    locker: caller,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

pub fn unlock(ctx: Context<LockBatch>) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  unlock_in_place(batch_state, &caller)?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Batch unlocked by {}", caller);

  emit!(BatchUnlocked {
    locker: caller,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct LockBatch<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
