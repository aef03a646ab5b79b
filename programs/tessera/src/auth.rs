//! Role checks for the Tessera basket program
//! Every gated instruction MUST call one of these before touching state

use anchor_lang::prelude::*;

use crate::{error::TesseraError, state::BatchState};

/// Assert the caller is the batch owner
pub fn require_owner(state: &BatchState, caller: &Pubkey) -> Result<()> {
  require!(state.owner == *caller, TesseraError::Unauthorized);
  Ok(())
}

/// Assert the caller is the batch manager
pub fn require_manager(state: &BatchState, caller: &Pubkey) -> Result<()> {
  require!(state.manager == *caller, TesseraError::Unauthorized);
  Ok(())
}

/// Assert the batch is either unlocked or locked by this caller
/// Gated mutations go through here so a lock holder is never starved
/// by its own lock
pub fn require_locker_or_unlocked(state: &BatchState, caller: &Pubkey) -> Result<()> {
  require!(
    !state.is_locked || state.locker == *caller,
    TesseraError::Unauthorized
  );
  Ok(())
}

/// Assert the batch is locked AND the caller holds the lock
/// The delegated call surface is gated on this stricter form
pub fn require_locker(state: &BatchState, caller: &Pubkey) -> Result<()> {
  require!(
    state.is_locked && state.locker == *caller,
    TesseraError::Unauthorized
  );
  Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_state(owner: Pubkey, manager: Pubkey) -> BatchState {
        BatchState {
            owner,
            manager,
            locker: Pubkey::default(),
            is_locked: false,
            target_oracle: Pubkey::default(),
            trading_oracle: Pubkey::default(),
            target_value: 0,
            trading_value: 0,
            total_supply: 0,
            components: vec![],
            bump: 255,
            authority_bump: 255,
            operation_counter: 0,
            _reserved: [0; 8],
        }
    }

    #[test]
    fn test_owner_check() {
        let owner = Pubkey::new_unique();
        let state = mock_state(owner, Pubkey::new_unique());

        assert!(require_owner(&state, &owner).is_ok());
        assert!(require_owner(&state, &Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_manager_check() {
        let manager = Pubkey::new_unique();
        let state = mock_state(Pubkey::new_unique(), manager);

        assert!(require_manager(&state, &manager).is_ok());
        // owner is not implicitly a manager
        assert!(require_manager(&state, &state.owner).is_err());
    }

    #[test]
    fn test_locker_or_unlocked_when_unlocked() {
        let state = mock_state(Pubkey::new_unique(), Pubkey::new_unique());

        // anyone passes while no lock is held
        assert!(require_locker_or_unlocked(&state, &Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn test_locker_or_unlocked_when_locked() {
        let locker = Pubkey::new_unique();
        let mut state = mock_state(Pubkey::new_unique(), Pubkey::new_unique());
        state.is_locked = true;
        state.locker = locker;

        assert!(require_locker_or_unlocked(&state, &locker).is_ok());
        assert!(require_locker_or_unlocked(&state, &Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_require_locker_matrix() {
        let locker = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let mut state = mock_state(Pubkey::new_unique(), Pubkey::new_unique());

        // unlocked: nobody passes, not even a would-be locker
        assert!(require_locker(&state, &locker).is_err());
        assert!(require_locker(&state, &other).is_err());

        state.is_locked = true;
        state.locker = locker;

        assert!(require_locker(&state, &locker).is_ok());
        assert!(require_locker(&state, &other).is_err());
    }
}
