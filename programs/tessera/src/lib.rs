use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod lock;
pub mod math;
pub mod oracle;
pub mod registry;
pub mod state;

use instructions::*;
use state::AssetEntry;

declare_id!("DNJkHdH2tzCG9V8RX2bKRZKHxZccYBkBjqqSsG9midvc");

#[program]
pub mod tessera {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        manager: Pubkey,
        target_oracle: Pubkey,
        trading_oracle: Pubkey,
        components: Vec<AssetEntry>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, manager, target_oracle, trading_oracle, components)
    }

    /// Rotate the manager role (manager only)
    pub fn set_manager(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
        instructions::set_manager::handler(ctx, new_manager)
    }

    /// Hand over the admin role (owner only)
    pub fn set_owner(ctx: Context<SetOwner>, new_owner: Pubkey) -> Result<()> {
        instructions::set_owner::handler(ctx, new_owner)
    }

    pub fn set_target_oracle(ctx: Context<SetOracle>, new_oracle: Pubkey) -> Result<()> {
        instructions::set_oracles::set_target_oracle(ctx, new_oracle)
    }

    pub fn set_trading_oracle(ctx: Context<SetOracle>, new_oracle: Pubkey) -> Result<()> {
        instructions::set_oracles::set_trading_oracle(ctx, new_oracle)
    }

    /// Take the lock slot; the signing manager becomes the locker
    pub fn lock(ctx: Context<LockBatch>) -> Result<()> {
        instructions::lock::lock(ctx)
    }

    /// Release the lock slot (locker only)
    pub fn unlock(ctx: Context<LockBatch>) -> Result<()> {
        instructions::lock::unlock(ctx)
    }

    pub fn add_component(
        ctx: Context<MutateRegistry>,
        identifier: Pubkey,
        ticker: String,
    ) -> Result<()> {
        instructions::add_component::handler(ctx, identifier, ticker)
    }

    pub fn remove_component(
        ctx: Context<MutateRegistry>,
        identifier: Pubkey,
        ticker: String,
    ) -> Result<()> {
        instructions::remove_component::handler(ctx, identifier, ticker)
    }

    /// Replace one registry entry with another in a single step
    pub fn swap_asset(
        ctx: Context<MutateRegistry>,
        removed_identifier: Pubkey,
        added_identifier: Pubkey,
        added_ticker: String,
    ) -> Result<()> {
        instructions::swap_asset::handler(ctx, removed_identifier, added_identifier, added_ticker)
    }

    /// Mint shares to a holder (owner only)
    pub fn mint(ctx: Context<MintShares>, quantity: u128) -> Result<()> {
        instructions::mint::handler(ctx, quantity)
    }

    /// Burn shares from a holder (owner only)
    pub fn burn(ctx: Context<BurnShares>, quantity: u128) -> Result<()> {
        instructions::burn::handler(ctx, quantity)
    }

    /// Move shares between holders; reserve funds never move this way
    pub fn transfer(ctx: Context<TransferShares>, quantity: u128) -> Result<()> {
        instructions::transfer::handler(ctx, quantity)
    }

    pub fn refresh_target_value(ctx: Context<RefreshValue>) -> Result<()> {
        instructions::refresh_values::refresh_target_value(ctx)
    }

    pub fn refresh_trading_value(ctx: Context<RefreshValue>) -> Result<()> {
        instructions::refresh_values::refresh_trading_value(ctx)
    }

    /// Rebalance the supply against the cached valuations (owner only)
    pub fn adjust_supply(ctx: Context<AdjustSupply>) -> Result<()> {
        instructions::adjust_supply::handler(ctx)
    }

    /// Arbitrary dispatch as the batch authority (locker only)
    pub fn invoke<'info>(
        ctx: Context<'_, '_, '_, 'info, InvokeCall<'info>>,
        data: Vec<u8>,
        value: u64,
    ) -> Result<Vec<u8>> {
        instructions::invoke::invoke_handler(ctx, data, value)
    }

    pub fn invoke_approve(ctx: Context<InvokeApprove>, quantity: u64) -> Result<()> {
        instructions::invoke::invoke_approve(ctx, quantity)
    }

    pub fn invoke_transfer(ctx: Context<InvokeTransfer>, quantity: u64) -> Result<()> {
        instructions::invoke::invoke_transfer(ctx, quantity)
    }

    /// Transfer that fails unless the source drops by exactly the quantity
    pub fn strict_invoke_transfer(ctx: Context<InvokeTransfer>, quantity: u64) -> Result<()> {
        instructions::invoke::strict_invoke_transfer(ctx, quantity)
    }

    pub fn invoke_wrap_native(ctx: Context<InvokeWrapNative>, quantity: u64) -> Result<()> {
        instructions::invoke::invoke_wrap_native(ctx, quantity)
    }

    pub fn invoke_unwrap_native(ctx: Context<InvokeUnwrapNative>) -> Result<()> {
        instructions::invoke::invoke_unwrap_native(ctx)
    }

    pub fn init_value_feed(ctx: Context<InitValueFeed>, initial_value: u128) -> Result<()> {
        instructions::value_feed::init_value_feed(ctx, initial_value)
    }

    pub fn update_value_feed(ctx: Context<UpdateValueFeed>, value: u128) -> Result<()> {
        instructions::value_feed::update_value_feed(ctx, value)
    }

    pub fn get_components(ctx: Context<ViewBatch>) -> Result<Vec<Pubkey>> {
        instructions::view::get_components(ctx)
    }

    pub fn is_component(ctx: Context<ViewBatch>, identifier: Pubkey) -> Result<bool> {
        instructions::view::is_component(ctx, identifier)
    }

    pub fn get_batch_target_value(ctx: Context<ViewBatch>) -> Result<u128> {
        instructions::view::get_batch_target_value(ctx)
    }

    pub fn get_batch_trading_value(ctx: Context<ViewBatch>) -> Result<u128> {
        instructions::view::get_batch_trading_value(ctx)
    }
}
