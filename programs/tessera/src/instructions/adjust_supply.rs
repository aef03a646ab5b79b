//! Adjust supply instruction - the rebalancer
//! Restates the supply against the cached valuations and applies the
//! correction to the reserve holder

use anchor_lang::prelude::*;

use crate::auth::{require_locker_or_unlocked, require_owner};
use crate::events::SupplyAdjusted;
use crate::ledger::{self, SupplyCorrection};
use crate::state::*;

pub fn handler(ctx: Context<AdjustSupply>) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  let batch_state = &mut ctx.accounts.batch_state;
  let reserve_holder = &mut ctx.accounts.reserve_holder;

  require_owner(batch_state, &caller)?;
  require_locker_or_unlocked(batch_state, &caller)?;

  let old_total_supply = batch_state.total_supply;
  let old_reserve_balance = reserve_holder.balance;
  let trading_value = batch_state.trading_value;
  let target_value = batch_state.target_value;

  let correction = ledger::compute_supply_correction(
    old_total_supply,
    old_reserve_balance,
    trading_value,
    target_value,
  )?;

  let (new_reserve_balance, new_total_supply) = match correction {
    SupplyCorrection::None => {
      msg!("Supply already balanced, no correction");
      return Ok(());
    }
    SupplyCorrection::Mint(quantity) => {
      msg!("Minting {} into reserve", quantity);
      ledger::credit(old_reserve_balance, old_total_supply, quantity)?
    }
    SupplyCorrection::Burn(quantity) => {
      msg!("Burning {} from reserve", quantity);
      ledger::debit(old_reserve_balance, old_total_supply, quantity)?
    }
  };

  reserve_holder.balance = new_reserve_balance;
  batch_state.total_supply = new_total_supply;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!("Total supply: {} -> {}", old_total_supply, new_total_supply);
  msg!("Reserve: {} -> {}", old_reserve_balance, new_reserve_balance);

  emit!(SupplyAdjusted {
    trading_value,
    target_value,
    old_total_supply,
    new_total_supply,
    old_reserve_balance,
    new_reserve_balance,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct AdjustSupply<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// Reserve holder - keyed by the batch state itself
  #[account(
    mut,
    seeds = [HOLDER_SEED, batch_state.key().as_ref()],
    bump = reserve_holder.bump,
  )]
  pub reserve_holder: Account<'info, HolderAccount>,
}
