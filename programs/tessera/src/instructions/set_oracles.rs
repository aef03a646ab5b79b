//! Oracle rotation instructions
//! The owner may repoint either feed; cached values are kept until the
//! next refresh reads through the new feed

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_owner};
use crate::events::{TargetOracleUpdated, TradingOracleUpdated};
use crate::state::*;

pub fn set_target_oracle(ctx: Context<SetOracle>, new_oracle: Pubkey) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let old_oracle = batch_state.target_oracle;
  batch_state.target_oracle = new_oracle;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Target oracle: {} -> {}", old_oracle, new_oracle);

  emit!(TargetOracleUpdated {
    old_oracle,
    new_oracle,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

pub fn set_trading_oracle(ctx: Context<SetOracle>, new_oracle: Pubkey) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let old_oracle = batch_state.trading_oracle;
  batch_state.trading_oracle = new_oracle;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Trading oracle: {} -> {}", old_oracle, new_oracle);

  emit!(TradingOracleUpdated {
    old_oracle,
    new_oracle,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct SetOracle<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
