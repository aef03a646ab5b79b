//! Transfer instruction - holder-to-holder share movement
//! Ungated except for the reserve guard; total supply is unchanged

use anchor_lang::prelude::*;

use crate::error::TesseraError;
use crate::events::Transferred;
use crate::ledger::assert_not_reserve;
use crate::state::*;

pub fn handler(ctx: Context<TransferShares>, quantity: u128) -> Result<()> {
  let sender = ctx.accounts.sender.key();
  let recipient = ctx.accounts.recipient.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require!(quantity > 0, TesseraError::ZeroAmount);
  require!(sender != recipient, TesseraError::InvalidParameter);

  // the reserve only moves through the rebalancer
  let reserve = batch_state.key();
  assert_not_reserve(&reserve, &sender, &recipient)?;

  let from_holder = &mut ctx.accounts.from_holder;
  from_holder.balance = from_holder
    .balance
    .checked_sub(quantity)
    .ok_or(TesseraError::InsufficientBalance)?;

  let to_holder = &mut ctx.accounts.to_holder;
  if to_holder.owner == Pubkey::default() {
    to_holder.owner = recipient;
    to_holder.bump = ctx.bumps.to_holder;
  }
  to_holder.balance = to_holder
    .balance
    .checked_add(quantity)
    .ok_or(TesseraError::ArithmeticOverflow)?;

  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Transferred {} shares: {} -> {}", quantity, sender, recipient);

  emit!(Transferred {
    from: sender,
    to: recipient,
    quantity,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
  #[account(mut)]
  pub sender: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  #[account(
    mut,
    seeds = [HOLDER_SEED, sender.key().as_ref()],
    bump = from_holder.bump,
  )]
  pub from_holder: Account<'info, HolderAccount>,

  /// CHECK: Any key may receive shares; its holder PDA is derived below
  pub recipient: UncheckedAccount<'info>,

  #[account(
    init_if_needed,
    payer = sender,
    space = HolderAccount::LEN,
    seeds = [HOLDER_SEED, recipient.key().as_ref()],
    bump
  )]
  pub to_holder: Account<'info, HolderAccount>,

  pub system_program: Program<'info, System>,
}
