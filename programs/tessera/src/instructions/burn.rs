//! Burn instruction - owner-gated supply primitive
//! Debits a holder and shrinks the total supply by the same quantity

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_owner};
use crate::error::TesseraError;
use crate::events::Burned;
use crate::ledger;
use crate::state::*;

pub fn handler(ctx: Context<BurnShares>, quantity: u128) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;
  require!(quantity > 0, TesseraError::ZeroAmount);

  let holder = &mut ctx.accounts.holder;

  let (new_balance, new_total_supply) =
    ledger::debit(holder.balance, batch_state.total_supply, quantity)?;

  holder.balance = new_balance;
  batch_state.total_supply = new_total_supply;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Burned {} from {}", quantity, holder.owner);
  msg!("New total supply: {}", new_total_supply);

  emit!(Burned {
    from: holder.owner,
    quantity,
    new_total_supply,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct BurnShares<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: The key whose holder PDA is debited
  pub holder_owner: UncheckedAccount<'info>,

  #[account(
    mut,
    seeds = [HOLDER_SEED, holder_owner.key().as_ref()],
    bump = holder.bump,
  )]
  pub holder: Account<'info, HolderAccount>,
}
