//! Pure mathematical functions for the Tessera basket program
//! All functions are deterministic and use 1e18 fixed-point arithmetic
//! Fully testable in isolation

use uint::construct_uint;

construct_uint! {
  /// 256-bit unsigned integer, four u64 limbs
  pub struct U256(4);
}

/// Multiply two u128 values and divide by a third, rounding DOWN
/// The intermediate product is widened to 256 bits so 1e18-scaled
/// operands never overflow mid-computation
/// Returns None on division by zero or when the result exceeds u128
pub fn mul_div_down(a: u128, b: u128, c: u128) -> Option<u128> {
  if c == 0 {
    return None;
  }

  let result = U256::from(a)
    .checked_mul(U256::from(b))?
    .checked_div(U256::from(c))?;

  if result > U256::from(u128::MAX) {
    return None;
  }

  Some(result.as_u128())
}

/// Multiply two u128 values and divide by a third, rounding UP
/// Returns None on division by zero or when the result exceeds u128
pub fn mul_div_up(a: u128, b: u128, c: u128) -> Option<u128> {
  if c == 0 {
    return None;
  }

  let result = U256::from(a)
    .checked_mul(U256::from(b))?
    .checked_add(U256::from(c - 1))? // add (c - 1) before division to round up
    .checked_div(U256::from(c))?;

  if result > U256::from(u128::MAX) {
    return None;
  }

  Some(result.as_u128())
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = crate::constants::PRICE_PRECISION;

    #[test]
    fn mul_div_down_truncates() {
        assert_eq!(mul_div_down(10, 10, 3), Some(33));
        assert_eq!(mul_div_down(7, 1, 2), Some(3));
    }

    #[test]
    fn mul_div_up_rounds_up() {
        assert_eq!(mul_div_up(10, 10, 3), Some(34));
        assert_eq!(mul_div_up(7, 1, 2), Some(4));
        // exact division does not round
        assert_eq!(mul_div_up(10, 10, 5), Some(20));
    }

    #[test]
    fn division_by_zero_is_none() {
        assert_eq!(mul_div_down(1, 1, 0), None);
        assert_eq!(mul_div_up(1, 1, 0), None);
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        // 2e18 * 1000e18 overflows u128 as a product but fits after rescale
        let trading = 2 * E18;
        let supply = 1000 * E18;
        assert_eq!(mul_div_down(trading, supply, E18), Some(2000 * E18));
    }

    #[test]
    fn result_above_u128_is_none() {
        assert_eq!(mul_div_down(u128::MAX, 2, 1), None);
        assert_eq!(mul_div_up(u128::MAX, 2, 1), None);
    }
}
