//! Exercises Tessera's lock and delegated-call surface from another program.
//! The module's own PDA plays the caller role: once it is set as the batch
//! manager it can take the lock, move batch funds, and release the lock,
//! all through CPI with the PDA signing.

use anchor_lang::prelude::*;
use tessera::program::Tessera;

declare_id!("E5L3jT8u2qEp9UYXPq2DD97fsVvtzhywHXPRohznfhQr");

pub const MODULE_AUTHORITY_SEED: &[u8] = b"module_authority";

#[program]
pub mod module_tester {
    use super::*;

    /// CPI into Tessera's lock entrypoint with the module PDA as caller.
    ///
    /// Succeeds only after the batch manager role has been handed to the
    /// module authority PDA.
    pub fn proxy_lock(ctx: Context<ProxyLock>) -> Result<()> {
        let seeds: &[&[u8]] = &[MODULE_AUTHORITY_SEED, &[ctx.bumps.module_authority]];
        let signer = &[seeds];

        let cpi_accounts = tessera::cpi::accounts::LockBatch {
            caller: ctx.accounts.module_authority.to_account_info(),
            batch_state: ctx.accounts.batch_state.to_account_info(),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.tessera_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        tessera::cpi::lock(cpi_ctx)
    }

    /// CPI into Tessera's unlock entrypoint with the module PDA as caller.
    pub fn proxy_unlock(ctx: Context<ProxyLock>) -> Result<()> {
        let seeds: &[&[u8]] = &[MODULE_AUTHORITY_SEED, &[ctx.bumps.module_authority]];
        let signer = &[seeds];

        let cpi_accounts = tessera::cpi::accounts::LockBatch {
            caller: ctx.accounts.module_authority.to_account_info(),
            batch_state: ctx.accounts.batch_state.to_account_info(),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.tessera_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        tessera::cpi::unlock(cpi_ctx)
    }

    /// CPI into Tessera's invoke_transfer while holding the lock.
    ///
    /// Tessera only honors this when the module PDA is the current locker,
    /// so the expected sequence is proxy_lock, proxy_invoke_transfer,
    /// proxy_unlock.
    pub fn proxy_invoke_transfer(ctx: Context<ProxyInvokeTransfer>, quantity: u64) -> Result<()> {
        let seeds: &[&[u8]] = &[MODULE_AUTHORITY_SEED, &[ctx.bumps.module_authority]];
        let signer = &[seeds];

        let cpi_accounts = tessera::cpi::accounts::InvokeTransfer {
            caller: ctx.accounts.module_authority.to_account_info(),
            batch_state: ctx.accounts.batch_state.to_account_info(),
            batch_authority: ctx.accounts.batch_authority.to_account_info(),
            source: ctx.accounts.source.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            destination: ctx.accounts.destination.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.tessera_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        tessera::cpi::invoke_transfer(cpi_ctx, quantity)
    }
}

#[derive(Accounts)]
pub struct ProxyLock<'info> {
    pub payer: Signer<'info>,

    /// Module authority PDA, the caller Tessera sees.
    /// CHECK: Address-constrained by seeds, signs the CPI.
    #[account(
        seeds = [MODULE_AUTHORITY_SEED],
        bump,
    )]
    pub module_authority: UncheckedAccount<'info>,

    /// Tessera BatchState account.
    /// CHECK: Validated by Tessera program during CPI.
    #[account(mut)]
    pub batch_state: UncheckedAccount<'info>,

    /// Tessera program account for CPI target.
    pub tessera_program: Program<'info, Tessera>,
}

#[derive(Accounts)]
pub struct ProxyInvokeTransfer<'info> {
    pub payer: Signer<'info>,

    /// Module authority PDA, the caller Tessera sees.
    /// CHECK: Address-constrained by seeds, signs the CPI.
    #[account(
        seeds = [MODULE_AUTHORITY_SEED],
        bump,
    )]
    pub module_authority: UncheckedAccount<'info>,

    /// Tessera BatchState account.
    /// CHECK: Validated by Tessera program during CPI.
    pub batch_state: UncheckedAccount<'info>,

    /// Tessera batch authority PDA.
    /// CHECK: Validated by Tessera program during CPI.
    pub batch_authority: UncheckedAccount<'info>,

    /// Source token account owned by the batch authority.
    /// CHECK: Validated by Tessera program during CPI.
    #[account(mut)]
    pub source: UncheckedAccount<'info>,

    /// Token mint of the transferred asset.
    /// CHECK: Validated by Tessera program during CPI.
    pub mint: UncheckedAccount<'info>,

    /// Destination token account.
    /// CHECK: Validated by Tessera program during CPI.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    /// Token program account.
    /// CHECK: Tessera validates the expected token program.
    pub token_program: UncheckedAccount<'info>,

    /// Tessera program account for CPI target.
    pub tessera_program: Program<'info, Tessera>,
}
