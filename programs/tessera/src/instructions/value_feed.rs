//! Native push feed instructions
//! An off-chain publisher initializes its own feed PDA and pushes values;
//! the batch points an oracle slot at the feed account to consume them

use anchor_lang::prelude::*;

use crate::events::ValueFeedUpdated;
use crate::state::*;

pub fn init_value_feed(ctx: Context<InitValueFeed>, initial_value: u128) -> Result<()> {
  let feed = &mut ctx.accounts.feed;

  feed.authority = ctx.accounts.authority.key();
  feed.value = initial_value;
  feed.last_updated = Clock::get()?.unix_timestamp;
  feed.bump = ctx.bumps.feed;

  msg!("Value feed created: {}", feed.key());
  msg!("Initial value: {}", initial_value);

  Ok(())
}

pub fn update_value_feed(ctx: Context<UpdateValueFeed>, value: u128) -> Result<()> {
  let feed = &mut ctx.accounts.feed;

  let old_value = feed.value;
  feed.value = value;
  feed.last_updated = Clock::get()?.unix_timestamp;

  msg!("Feed value: {} -> {}", old_value, value);

  emit!(ValueFeedUpdated {
    feed: feed.key(),
    old_value,
    new_value: value,
    timestamp: feed.last_updated,
  });

  Ok(())
}

#[derive(Accounts)]
pub struct InitValueFeed<'info> {
  #[account(mut)]
  pub authority: Signer<'info>,

  #[account(
    init,
    payer = authority,
    space = ValueFeed::LEN,
    seeds = [VALUE_FEED_SEED, authority.key().as_ref()],
    bump
  )]
  pub feed: Account<'info, ValueFeed>,

  pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateValueFeed<'info> {
  pub authority: Signer<'info>,

  #[account(
    mut,
    seeds = [VALUE_FEED_SEED, authority.key().as_ref()],
    bump = feed.bump,
    has_one = authority,
  )]
  pub feed: Account<'info, ValueFeed>,
}
