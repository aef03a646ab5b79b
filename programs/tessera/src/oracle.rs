//! Valuation read seam
//! Two feed shapes are accepted: the program-native push feed, and a Pyth
//! price account parsed from raw bytes and rescaled to 1e18

use anchor_lang::prelude::*;
use pyth_sdk_solana::state::{load_price_account, PriceStatus, SolanaPriceAccount};

use crate::{
  constants::PRICE_PRECISION,
  error::TesseraError,
  math::mul_div_down,
  state::ValueFeed,
};

/// Read a 1e18-scaled value out of the configured oracle account
/// Accounts owned by this program are native push feeds; anything else is
/// treated as a Pyth price account
pub fn read_value(info: &AccountInfo) -> Result<u128> {
  let data = info.try_borrow_data()?;

  if *info.owner == crate::ID {
    let feed = ValueFeed::try_deserialize(&mut &data[..])?;
    require!(feed.value > 0, TesseraError::ValueNotSet);
    return Ok(feed.value);
  }

  let price_account: &SolanaPriceAccount =
    load_price_account(&data).map_err(|_| TesseraError::InvalidOracle)?;

  require!(
    price_account.agg.status == PriceStatus::Trading,
    TesseraError::InvalidOracle
  );

  scale_pyth_price(price_account.agg.price, price_account.expo)
}

/// Rescale a Pyth (price, exponent) pair to 1e18 fixed point
/// Non-positive prices are rejected; precision beyond 1e-18 truncates
pub fn scale_pyth_price(price: i64, expo: i32) -> Result<u128> {
  require!(price > 0, TesseraError::InvalidOracle);

  let price = price as u128;

  if expo >= 0 {
    let factor = 10u128
      .checked_pow(expo as u32)
      .ok_or(TesseraError::ArithmeticOverflow)?;

    price
      .checked_mul(factor)
      .and_then(|v| v.checked_mul(PRICE_PRECISION))
      .ok_or(TesseraError::ArithmeticOverflow.into())
  } else {
    let divisor = 10u128
      .checked_pow(expo.unsigned_abs())
      .ok_or(TesseraError::ArithmeticOverflow)?;

    mul_div_down(price, PRICE_PRECISION, divisor).ok_or(TesseraError::ArithmeticOverflow.into())
  }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = PRICE_PRECISION;

    #[test]
    fn test_negative_exponent_scaling() {
        // 1.50000000 with expo -8
        assert_eq!(scale_pyth_price(150_000_000, -8).unwrap(), 3 * E18 / 2);
        // sub-1e-18 precision truncates toward zero
        assert_eq!(scale_pyth_price(1, -20).unwrap(), 0);
    }

    #[test]
    fn test_zero_exponent_scaling() {
        assert_eq!(scale_pyth_price(2, 0).unwrap(), 2 * E18);
    }

    #[test]
    fn test_positive_exponent_scaling() {
        assert_eq!(scale_pyth_price(3, 2).unwrap(), 300 * E18);
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert!(scale_pyth_price(0, -8).is_err());
        assert!(scale_pyth_price(-1, -8).is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(scale_pyth_price(i64::MAX, 30).is_err());
    }
}
