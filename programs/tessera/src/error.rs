use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum TesseraError {
  #[msg("Caller does not hold the role required for this operation")]
  Unauthorized,

  #[msg("Batch is already locked by another caller")]
  AlreadyLocked,

  #[msg("Batch is not locked")]
  NotLocked,

  #[msg("Component not found in the registry")]
  NotFound,

  #[msg("Component is already present in the registry")]
  AlreadyPresent,

  #[msg("Insufficient balance to complete this operation")]
  InsufficientBalance,

  #[msg("Transferred amount does not match the requested quantity")]
  BalanceMismatch,

  #[msg("Reserve funds cannot be moved by holder transfers")]
  ReserveFundsLocked,

  #[msg("Arithmetic overflow occurred")]
  ArithmeticOverflow,

  #[msg("Amount must be greater than zero")]
  ZeroAmount,

  #[msg("Registry is full - component limit reached")]
  ComponentLimitExceeded,

  #[msg("Ticker exceeds the maximum byte length")]
  TickerTooLong,

  #[msg("Valuation has not been refreshed yet")]
  ValueNotSet,

  #[msg("Oracle account is malformed or not tradable")]
  InvalidOracle,

  #[msg("Invalid parameter value provided")]
  InvalidParameter,
}
