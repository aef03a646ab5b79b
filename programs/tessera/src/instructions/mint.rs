//! Mint instruction - owner-gated supply primitive
//! Credits a holder and grows the total supply by the same quantity

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_owner};
use crate::error::TesseraError;
use crate::events::Minted;
use crate::ledger;
use crate::state::*;

pub fn handler(ctx: Context<MintShares>, quantity: u128) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;
  require!(quantity > 0, TesseraError::ZeroAmount);

  let holder = &mut ctx.accounts.holder;
  if holder.owner == Pubkey::default() {
    // freshly created by init_if_needed
    holder.owner = ctx.accounts.recipient.key();
    holder.bump = ctx.bumps.holder;
  }

  let (new_balance, new_total_supply) =
    ledger::credit(holder.balance, batch_state.total_supply, quantity)?;

  holder.balance = new_balance;
  batch_state.total_supply = new_total_supply;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Minted {} to {}", quantity, holder.owner);
  msg!("New total supply: {}", new_total_supply);

  emit!(Minted {
    to: holder.owner,
    quantity,
    new_total_supply,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct MintShares<'info> {
  #[account(mut)]
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: Any key may receive shares; its holder PDA is derived below
  pub recipient: UncheckedAccount<'info>,

  #[account(
    init_if_needed,
    payer = caller,
    space = HolderAccount::LEN,
    seeds = [HOLDER_SEED, recipient.key().as_ref()],
    bump
  )]
  pub holder: Account<'info, HolderAccount>,

  pub system_program: Program<'info, System>,
}
