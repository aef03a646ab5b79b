//! Set owner instruction - hands over the admin role

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_owner};
use crate::events::OwnerChanged;
use crate::state::*;

pub fn handler(ctx: Context<SetOwner>, new_owner: Pubkey) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let old_owner = batch_state.owner;
  batch_state.owner = new_owner;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Owner changed: {} -> {}", old_owner, new_owner);

  emit!(OwnerChanged {
    old_owner,
    new_owner,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct SetOwner<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
