//! Refresh instructions - pull valuations from the configured oracles
//! Ungated reads; the oracle accounts themselves are owner-controlled

use anchor_lang::prelude::*;

use crate::error::TesseraError;
use crate::events::{TargetValueRefreshed, TradingValueRefreshed};
use crate::oracle;
use crate::state::*;

pub fn refresh_target_value(ctx: Context<RefreshValue>) -> Result<()> {
  let batch_state = &mut ctx.accounts.batch_state;

  require_keys_eq!(
    ctx.accounts.oracle.key(),
    batch_state.target_oracle,
    TesseraError::InvalidOracle
  );

  let new_value = oracle::read_value(&ctx.accounts.oracle)?;

  let old_value = batch_state.target_value;
  batch_state.target_value = new_value;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Target value refreshed: {} -> {}", old_value, new_value);

  emit!(TargetValueRefreshed {
    oracle: ctx.accounts.oracle.key(),
    old_value,
    new_value,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

pub fn refresh_trading_value(ctx: Context<RefreshValue>) -> Result<()> {
  let batch_state = &mut ctx.accounts.batch_state;

  require_keys_eq!(
    ctx.accounts.oracle.key(),
    batch_state.trading_oracle,
    TesseraError::InvalidOracle
  );

  let new_value = oracle::read_value(&ctx.accounts.oracle)?;

  let old_value = batch_state.trading_value;
  batch_state.trading_value = new_value;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Trading value refreshed: {} -> {}", old_value, new_value);

  emit!(TradingValueRefreshed {
    oracle: ctx.accounts.oracle.key(),
    old_value,
    new_value,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct RefreshValue<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: Must match the oracle stored in batch_state; parsed by the
  /// valuation read seam
  pub oracle: UncheckedAccount<'info>,
}
