//! Share ledger bookkeeping and the supply rebalancing rule
//! All balance movement is checked arithmetic; nothing here touches accounts

use anchor_lang::prelude::*;

use crate::{constants::PRICE_PRECISION, error::TesseraError, math::mul_div_down};

/// Outcome of a rebalancing computation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplyCorrection {
  /// Reserve already matches the valuation, nothing to do
  None,
  /// Mint this many shares into the reserve
  Mint(u128),
  /// Burn this many shares from the reserve
  Burn(u128),
}

/// Credit a holder balance and the total supply in one step
/// Returns (new_balance, new_total_supply)
pub fn credit(balance: u128, total_supply: u128, quantity: u128) -> Result<(u128, u128)> {
  let new_balance = balance
    .checked_add(quantity)
    .ok_or(TesseraError::ArithmeticOverflow)?;

  let new_total_supply = total_supply
    .checked_add(quantity)
    .ok_or(TesseraError::ArithmeticOverflow)?;

  Ok((new_balance, new_total_supply))
}

/// Debit a holder balance and the total supply in one step
/// Returns (new_balance, new_total_supply)
pub fn debit(balance: u128, total_supply: u128, quantity: u128) -> Result<(u128, u128)> {
  let new_balance = balance
    .checked_sub(quantity)
    .ok_or(TesseraError::InsufficientBalance)?;

  let new_total_supply = total_supply
    .checked_sub(quantity)
    .ok_or(TesseraError::InsufficientBalance)?;

  Ok((new_balance, new_total_supply))
}

/// Reject holder transfers that would move reserve funds
/// Only the rebalancer may change the reserve balance
pub fn assert_not_reserve(reserve: &Pubkey, from: &Pubkey, to: &Pubkey) -> Result<()> {
  require!(
    from != reserve && to != reserve,
    TesseraError::ReserveFundsLocked
  );
  Ok(())
}

/// Post-condition for strict token transfers: the source balance must have
/// dropped by exactly `quantity`, catching fee-on-transfer style mints
pub fn verify_strict_transfer_delta(
  balance_before: u64,
  balance_after: u64,
  quantity: u64,
) -> Result<()> {
  let delta = balance_before
    .checked_sub(balance_after)
    .ok_or(TesseraError::BalanceMismatch)?;

  require!(delta == quantity, TesseraError::BalanceMismatch);
  Ok(())
}

/// The rebalancing rule
///
/// Scales the supply so that circulating shares keep their target value:
/// the notional worth of the whole batch at the trading value is restated
/// in target-value shares, the circulating portion is carved out, and
/// whatever remains is the reserve the batch SHOULD hold. The correction
/// is the difference against the reserve it DOES hold.
pub fn compute_supply_correction(
  total_supply: u128,
  reserve_balance: u128,
  trading_value: u128,
  target_value: u128,
) -> Result<SupplyCorrection> {
  require!(trading_value > 0, TesseraError::ValueNotSet);
  require!(target_value > 0, TesseraError::ValueNotSet);

  let circulating = total_supply
    .checked_sub(reserve_balance)
    .ok_or(TesseraError::InsufficientBalance)?;

  // batch notional at the trading value, 1e18 scale
  let notional = mul_div_down(trading_value, total_supply, PRICE_PRECISION)
    .ok_or(TesseraError::ArithmeticOverflow)?;

  // shares the same notional is worth at the target value
  let price_adjusted_supply = mul_div_down(notional, PRICE_PRECISION, target_value)
    .ok_or(TesseraError::ArithmeticOverflow)?;

  // circulating holders keep their shares; the reserve absorbs the difference
  let adjusted_reserve = price_adjusted_supply
    .checked_sub(circulating)
    .ok_or(TesseraError::InsufficientBalance)?;

  let correction = if adjusted_reserve > reserve_balance {
    SupplyCorrection::Mint(adjusted_reserve - reserve_balance)
  } else if adjusted_reserve < reserve_balance {
    SupplyCorrection::Burn(reserve_balance - adjusted_reserve)
  } else {
    SupplyCorrection::None
  };

  Ok(correction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = PRICE_PRECISION;

    #[test]
    fn test_credit_debit_roundtrip() {
        let (balance, supply) = credit(100, 1000, 50).unwrap();
        assert_eq!((balance, supply), (150, 1050));

        let (balance, supply) = debit(balance, supply, 50).unwrap();
        assert_eq!((balance, supply), (100, 1000));
    }

    #[test]
    fn test_debit_beyond_balance_fails() {
        assert!(debit(10, 1000, 11).is_err());
    }

    #[test]
    fn test_credit_overflow_fails() {
        assert!(credit(u128::MAX, 0, 1).is_err());
        assert!(credit(0, u128::MAX, 1).is_err());
    }

    #[test]
    fn test_reserve_guard() {
        let reserve = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert!(assert_not_reserve(&reserve, &a, &b).is_ok());
        assert!(assert_not_reserve(&reserve, &reserve, &b).is_err());
        assert!(assert_not_reserve(&reserve, &a, &reserve).is_err());
    }

    #[test]
    fn test_strict_transfer_delta() {
        assert!(verify_strict_transfer_delta(100, 90, 10).is_ok());
        // fee-on-transfer style shortfall
        assert!(verify_strict_transfer_delta(100, 95, 10).is_err());
        // balance grew, underflow path
        assert!(verify_strict_transfer_delta(100, 110, 10).is_err());
        assert!(verify_strict_transfer_delta(0, 0, 0).is_ok());
    }

    #[test]
    fn test_correction_mint_case() {
        // supply 1000, empty reserve, trading at twice the target:
        // notional 2000 target-shares, 1000 circulating, reserve should be 1000
        let correction =
            compute_supply_correction(1000 * E18, 0, 2 * E18, E18).unwrap();
        assert_eq!(correction, SupplyCorrection::Mint(1000 * E18));
    }

    #[test]
    fn test_correction_burn_case() {
        // trading at half the target with a well-stocked reserve
        // notional 500 target-shares minus 400 circulating leaves 100
        let correction =
            compute_supply_correction(1000 * E18, 600 * E18, E18 / 2, E18).unwrap();
        assert_eq!(correction, SupplyCorrection::Burn(500 * E18));
    }

    #[test]
    fn test_correction_fixed_point_when_values_match() {
        // trading == target restates the supply onto itself
        let correction =
            compute_supply_correction(1000 * E18, 250 * E18, 3 * E18, 3 * E18).unwrap();
        assert_eq!(correction, SupplyCorrection::None);
    }

    #[test]
    fn test_correction_insufficient_reserve_fails() {
        // trading collapsed but the reserve cannot absorb the burn:
        // notional 100 target-shares < 900 circulating
        let result = compute_supply_correction(1000 * E18, 100 * E18, E18 / 10, E18);
        assert!(result.is_err());
    }

    #[test]
    fn test_correction_requires_valuations() {
        assert!(compute_supply_correction(1000 * E18, 0, 0, E18).is_err());
        assert!(compute_supply_correction(1000 * E18, 0, E18, 0).is_err());
    }

    #[test]
    fn test_correction_reserve_above_supply_fails() {
        assert!(compute_supply_correction(100, 200, E18, E18).is_err());
    }
}
