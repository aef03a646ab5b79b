//! View instructions - read-only queries answered through return data

use anchor_lang::prelude::*;

use crate::registry::contains_identifier;
use crate::state::*;

pub fn get_components(ctx: Context<ViewBatch>) -> Result<Vec<Pubkey>> {
  let identifiers = ctx
    .accounts
    .batch_state
    .components
    .iter()
    .map(|c| c.identifier)
    .collect();

  Ok(identifiers)
}

pub fn is_component(ctx: Context<ViewBatch>, identifier: Pubkey) -> Result<bool> {
  Ok(contains_identifier(
    &ctx.accounts.batch_state.components,
    &identifier,
  ))
}

pub fn get_batch_target_value(ctx: Context<ViewBatch>) -> Result<u128> {
  Ok(ctx.accounts.batch_state.target_value)
}

pub fn get_batch_trading_value(ctx: Context<ViewBatch>) -> Result<u128> {
  Ok(ctx.accounts.batch_state.trading_value)
}

#[derive(Accounts)]
pub struct ViewBatch<'info> {
  #[account(
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,
}
