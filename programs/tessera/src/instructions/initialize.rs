//! Initialize instruction - sets up the batch
//! Creates BatchState, the batch authority PDA and the reserve holder

use anchor_lang::prelude::*;

use crate::constants::{MAX_COMPONENTS, MAX_TICKER_LEN};
use crate::error::TesseraError;
use crate::events::BatchInitialized;
use crate::registry::has_duplicate;
use crate::state::*;

pub fn handler(
  ctx: Context<Initialize>,
  manager: Pubkey,
  target_oracle: Pubkey,
  trading_oracle: Pubkey,
  components: Vec<AssetEntry>,
) -> Result<()> {
  require!(
    components.len() <= MAX_COMPONENTS,
    TesseraError::ComponentLimitExceeded
  );
  for component in &components {
    require!(
      component.ticker.len() <= MAX_TICKER_LEN,
      TesseraError::TickerTooLong
    );
  }
  // a factory-supplied list may already carry duplicates
  require!(!has_duplicate(&components), TesseraError::AlreadyPresent);

  let batch_state = &mut ctx.accounts.batch_state;

  batch_state.owner = ctx.accounts.owner.key();
  batch_state.manager = manager;

  batch_state.locker = Pubkey::default();
  batch_state.is_locked = false;

  batch_state.target_oracle = target_oracle;
  batch_state.trading_oracle = trading_oracle;
  batch_state.target_value = 0;
  batch_state.trading_value = 0;

  batch_state.total_supply = 0;
  batch_state.components = components;

  batch_state.bump = ctx.bumps.batch_state;
  batch_state.authority_bump = ctx.bumps.batch_authority;
  batch_state.operation_counter = 0;
  batch_state._reserved = [0; 8];

  let reserve_holder = &mut ctx.accounts.reserve_holder;
  reserve_holder.owner = batch_state.key();
  reserve_holder.balance = 0;
  reserve_holder.bump = ctx.bumps.reserve_holder;

  msg!("Batch initialized!");
  msg!("Owner: {}", batch_state.owner);
  msg!("Manager: {}", batch_state.manager);
  msg!("Target oracle: {}", batch_state.target_oracle);
  msg!("Trading oracle: {}", batch_state.trading_oracle);
  msg!("Components: {}", batch_state.components.len());

  emit!(BatchInitialized {
    owner: batch_state.owner,
    manager: batch_state.manager,
    target_oracle,
    trading_oracle,
    component_count: batch_state.components.len() as u64,
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
  #[account(mut)]
  pub owner: Signer<'info>,

  /// BatchState PDA - stores roles, registry and valuations
  #[account(
    init,
    payer = owner,
    space = BatchState::LEN,
    seeds = [BATCH_STATE_SEED],
    bump
  )]
  pub batch_state: Account<'info, BatchState>,

  /// Reserve holder - the ledger slot the rebalancer mints into and burns from
  /// Keyed by the batch state itself so no external signer can own it
  #[account(
    init,
    payer = owner,
    space = HolderAccount::LEN,
    seeds = [HOLDER_SEED, batch_state.key().as_ref()],
    bump
  )]
  pub reserve_holder: Account<'info, HolderAccount>,

  /// CHECK: PDA will be validated by the seeds
  #[account(
    seeds = [BATCH_AUTHORITY_SEED],
    bump
  )]
  pub batch_authority: UncheckedAccount<'info>,

  pub system_program: Program<'info, System>,
}
