//! Single-slot lock over the batch
//! The lock persists across instructions: one caller acquires it, holds it
//! through any number of transactions, and releases it explicitly

use anchor_lang::prelude::*;

use crate::{error::TesseraError, state::BatchState};

/// Acquire the lock for `caller`
/// Fails if any caller already holds it, including `caller` itself
pub fn lock_in_place(state: &mut BatchState, caller: &Pubkey) -> Result<()> {
  require!(!state.is_locked, TesseraError::AlreadyLocked);

  state.is_locked = true;
  state.locker = *caller;

  Ok(())
}

/// Release the lock held by `caller`
/// Only the current locker may release
pub fn unlock_in_place(state: &mut BatchState, caller: &Pubkey) -> Result<()> {
  require!(state.is_locked, TesseraError::NotLocked);
  require!(state.locker == *caller, TesseraError::Unauthorized);

  state.is_locked = false;
  state.locker = Pubkey::default();

  Ok(())
}
