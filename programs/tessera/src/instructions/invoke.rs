//! Delegated call surface - locker-only instructions executed as the batch
//! The batch authority PDA signs everything here, so whoever holds the lock
//! can act on behalf of the batch until it releases

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
  instruction::{AccountMeta, Instruction},
  program::{get_return_data, invoke_signed},
};
use anchor_lang::system_program;
use anchor_spl::token_interface::{
  self, Approve, CloseAccount, Mint, SyncNative, TokenAccount, TokenInterface, TransferChecked,
};

use crate::auth::require_locker;
use crate::error::TesseraError;
use crate::events::Invoked;
use crate::ledger::verify_strict_transfer_delta;
use crate::state::*;

/// Arbitrary dispatch as the batch authority
/// Forwarded accounts come in as remaining accounts; any of them matching
/// the batch authority key is marked as a signer on the outgoing call.
/// A nonzero `value` is paid in lamports to the first forwarded account
/// before dispatch. The callee's return data is passed back verbatim, and
/// a callee failure aborts the whole transaction.
pub fn invoke_handler<'info>(
  ctx: Context<'_, '_, '_, 'info, InvokeCall<'info>>,
  data: Vec<u8>,
  value: u64,
) -> Result<Vec<u8>> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;

  let authority_key = ctx.accounts.batch_authority.key();
  let authority_bump = ctx.accounts.batch_state.authority_bump;
  let seeds: &[&[u8]] = &[BATCH_AUTHORITY_SEED, &[authority_bump]];
  let signer_seeds = &[seeds];

  if value > 0 {
    require!(
      !ctx.remaining_accounts.is_empty(),
      TesseraError::InvalidParameter
    );

    system_program::transfer(
      CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
          from: ctx.accounts.batch_authority.to_account_info(),
          to: ctx.remaining_accounts[0].clone(),
        },
        signer_seeds,
      ),
      value,
    )?;
    msg!("Paid {} lamports ahead of dispatch", value);
  }

  let metas: Vec<AccountMeta> = ctx
    .remaining_accounts
    .iter()
    .map(|info| AccountMeta {
      pubkey: *info.key,
      is_signer: info.is_signer || *info.key == authority_key,
      is_writable: info.is_writable,
    })
    .collect();

  let instruction = Instruction {
    program_id: ctx.accounts.target_program.key(),
    accounts: metas,
    data: data.clone(),
  };

  let mut infos = ctx.remaining_accounts.to_vec();
  infos.push(ctx.accounts.target_program.to_account_info());

  invoke_signed(&instruction, &infos, signer_seeds)?;

  let response = get_return_data()
    .filter(|(program, _)| *program == ctx.accounts.target_program.key())
    .map(|(_, bytes)| bytes)
    .unwrap_or_default();

  let batch_state = &mut ctx.accounts.batch_state;
  batch_state.operation_counter = batch_state.operation_counter.saturating_add(1);

  msg!(
    "Invoked {} with {} data bytes, got {} back",
    ctx.accounts.target_program.key(),
    data.len(),
    response.len()
  );

  emit!(Invoked {
    caller,
    target: ctx.accounts.target_program.key(),
    value,
    data,
    response: response.clone(),
    timestamp: Clock::get()?.unix_timestamp,
  });

  Ok(response)
}

/// Delegate spending of a batch-authority token account
pub fn invoke_approve(ctx: Context<InvokeApprove>, quantity: u64) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;

  let authority_bump = ctx.accounts.batch_state.authority_bump;
  let seeds: &[&[u8]] = &[BATCH_AUTHORITY_SEED, &[authority_bump]];
  let signer_seeds = &[seeds];

  token_interface::approve(
    CpiContext::new_with_signer(
      ctx.accounts.token_program.to_account_info(),
      Approve {
        to: ctx.accounts.source.to_account_info(),
        delegate: ctx.accounts.delegate.to_account_info(),
        authority: ctx.accounts.batch_authority.to_account_info(),
      },
      signer_seeds,
    ),
    quantity,
  )?;

  msg!(
    "Approved {} for delegate {}",
    quantity,
    ctx.accounts.delegate.key()
  );

  Ok(())
}

/// Move tokens out of a batch-authority token account
/// A zero quantity is a no-op rather than an error, so callers can issue
/// unconditional sweeps
pub fn invoke_transfer(ctx: Context<InvokeTransfer>, quantity: u64) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;

  if quantity == 0 {
    msg!("Zero quantity, nothing to transfer");
    return Ok(());
  }

  transfer_as_batch(&ctx, quantity)?;

  msg!(
    "Transferred {} tokens to {}",
    quantity,
    ctx.accounts.destination.key()
  );

  Ok(())
}

/// Like invoke_transfer, but insists the source balance drops by exactly
/// the requested quantity
pub fn strict_invoke_transfer(ctx: Context<InvokeTransfer>, quantity: u64) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;

  if quantity == 0 {
    msg!("Zero quantity, nothing to transfer");
    return Ok(());
  }

  let balance_before = ctx.accounts.source.amount;

  transfer_as_batch(&ctx, quantity)?;

  ctx.accounts.source.reload()?;
  verify_strict_transfer_delta(balance_before, ctx.accounts.source.amount, quantity)?;

  msg!(
    "Strictly transferred {} tokens to {}",
    quantity,
    ctx.accounts.destination.key()
  );

  Ok(())
}

fn transfer_as_batch(ctx: &Context<InvokeTransfer>, quantity: u64) -> Result<()> {
  let authority_bump = ctx.accounts.batch_state.authority_bump;
  let seeds: &[&[u8]] = &[BATCH_AUTHORITY_SEED, &[authority_bump]];
  let signer_seeds = &[seeds];

  token_interface::transfer_checked(
    CpiContext::new_with_signer(
      ctx.accounts.token_program.to_account_info(),
      TransferChecked {
        from: ctx.accounts.source.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.destination.to_account_info(),
        authority: ctx.accounts.batch_authority.to_account_info(),
      },
      signer_seeds,
    ),
    quantity,
    ctx.accounts.mint.decimals,
  )
}

/// Wrap native lamports held by the batch authority into its wrapped-native
/// token account
pub fn invoke_wrap_native(ctx: Context<InvokeWrapNative>, quantity: u64) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;
  require!(quantity > 0, TesseraError::ZeroAmount);

  let authority_bump = ctx.accounts.batch_state.authority_bump;
  let seeds: &[&[u8]] = &[BATCH_AUTHORITY_SEED, &[authority_bump]];
  let signer_seeds = &[seeds];

  system_program::transfer(
    CpiContext::new_with_signer(
      ctx.accounts.system_program.to_account_info(),
      system_program::Transfer {
        from: ctx.accounts.batch_authority.to_account_info(),
        to: ctx.accounts.wrapped_account.to_account_info(),
      },
      signer_seeds,
    ),
    quantity,
  )?;

  token_interface::sync_native(CpiContext::new(
    ctx.accounts.token_program.to_account_info(),
    SyncNative {
      account: ctx.accounts.wrapped_account.to_account_info(),
    },
  ))?;

  msg!("Wrapped {} lamports", quantity);

  Ok(())
}

/// Unwrap the whole wrapped-native balance back to the batch authority
/// Closing the account is the platform's unwrap; partial unwraps do not exist
pub fn invoke_unwrap_native(ctx: Context<InvokeUnwrapNative>) -> Result<()> {
  let caller = ctx.accounts.caller.key();
  require_locker(&ctx.accounts.batch_state, &caller)?;

  let unwrapped = ctx.accounts.wrapped_account.amount;

  let authority_bump = ctx.accounts.batch_state.authority_bump;
  let seeds: &[&[u8]] = &[BATCH_AUTHORITY_SEED, &[authority_bump]];
  let signer_seeds = &[seeds];

  token_interface::close_account(CpiContext::new_with_signer(
    ctx.accounts.token_program.to_account_info(),
    CloseAccount {
      account: ctx.accounts.wrapped_account.to_account_info(),
      destination: ctx.accounts.batch_authority.to_account_info(),
      authority: ctx.accounts.batch_authority.to_account_info(),
    },
    signer_seeds,
  ))?;

  msg!("Unwrapped {} lamports", unwrapped);

  Ok(())
}

#[derive(Accounts)]
pub struct InvokeCall<'info> {
  pub caller: Signer<'info>,

  #[account(
    mut,
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: PDA validated by seeds, signs the outgoing call
  #[account(
    mut,
    seeds = [BATCH_AUTHORITY_SEED],
    bump = batch_state.authority_bump,
  )]
  pub batch_authority: UncheckedAccount<'info>,

  /// CHECK: Any executable program may be a call target
  #[account(executable)]
  pub target_program: UncheckedAccount<'info>,

  pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InvokeApprove<'info> {
  pub caller: Signer<'info>,

  #[account(
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: PDA validated by seeds, token authority of the source
  #[account(
    seeds = [BATCH_AUTHORITY_SEED],
    bump = batch_state.authority_bump,
  )]
  pub batch_authority: UncheckedAccount<'info>,

  #[account(
    mut,
    token::authority = batch_authority,
  )]
  pub source: InterfaceAccount<'info, TokenAccount>,

  /// CHECK: Any key may be a delegate
  pub delegate: UncheckedAccount<'info>,

  pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct InvokeTransfer<'info> {
  pub caller: Signer<'info>,

  #[account(
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: PDA validated by seeds, token authority of the source
  #[account(
    seeds = [BATCH_AUTHORITY_SEED],
    bump = batch_state.authority_bump,
  )]
  pub batch_authority: UncheckedAccount<'info>,

  #[account(
    mut,
    token::mint = mint,
    token::authority = batch_authority,
  )]
  pub source: InterfaceAccount<'info, TokenAccount>,

  pub mint: InterfaceAccount<'info, Mint>,

  #[account(
    mut,
    token::mint = mint,
  )]
  pub destination: InterfaceAccount<'info, TokenAccount>,

  pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct InvokeWrapNative<'info> {
  pub caller: Signer<'info>,

  #[account(
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: PDA validated by seeds, pays the lamports being wrapped
  #[account(
    mut,
    seeds = [BATCH_AUTHORITY_SEED],
    bump = batch_state.authority_bump,
  )]
  pub batch_authority: UncheckedAccount<'info>,

  /// Wrapped-native token account owned by the batch authority
  #[account(
    mut,
    token::authority = batch_authority,
    constraint = wrapped_account.mint == anchor_spl::token::spl_token::native_mint::ID
      @ TesseraError::InvalidParameter,
  )]
  pub wrapped_account: InterfaceAccount<'info, TokenAccount>,

  pub token_program: Interface<'info, TokenInterface>,
  pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InvokeUnwrapNative<'info> {
  pub caller: Signer<'info>,

  #[account(
    seeds = [BATCH_STATE_SEED],
    bump = batch_state.bump,
  )]
  pub batch_state: Account<'info, BatchState>,

  /// CHECK: PDA validated by seeds, receives the unwrapped lamports
  #[account(
    mut,
    seeds = [BATCH_AUTHORITY_SEED],
    bump = batch_state.authority_bump,
  )]
  pub batch_authority: UncheckedAccount<'info>,

  /// Wrapped-native token account owned by the batch authority
  #[account(
    mut,
    token::authority = batch_authority,
    constraint = wrapped_account.mint == anchor_spl::token::spl_token::native_mint::ID
      @ TesseraError::InvalidParameter,
  )]
  pub wrapped_account: InterfaceAccount<'info, TokenAccount>,

  pub token_program: Interface<'info, TokenInterface>,
}
