// crates/ballast-minter/src/scale.rs
//
// Decimal normalization between collateral tokens and the 18-decimal stable
// token. Scaling down rounds toward zero; a zero result is dust and the
// caller rejects it.

use ballast_core::error::BallastError;
use ballast_core::token::{Units, STABLE_DECIMALS};

/// Convert `amount` of a token with `decimals` precision into stable units.
///
/// `decimals <= 18` scales up exactly; `decimals > 18` floor-divides.
///
/// # Errors
/// Returns `Overflow` if the scaled amount does not fit in u128.
pub fn to_stable_units(amount: u128, decimals: u8) -> Result<Units, BallastError> {
    if decimals <= STABLE_DECIMALS {
        let factor = 10u128.pow((STABLE_DECIMALS - decimals) as u32);
        amount.checked_mul(factor).ok_or(BallastError::Overflow)
    } else {
        let factor = 10u128.pow((decimals - STABLE_DECIMALS) as u32);
        Ok(amount / factor)
    }
}

/// Convert `amount` of stable units into a token with `decimals` precision.
///
/// The inverse of `to_stable_units`; scaling down rounds toward zero.
pub fn from_stable_units(amount: Units, decimals: u8) -> Result<u128, BallastError> {
    if decimals <= STABLE_DECIMALS {
        let factor = 10u128.pow((STABLE_DECIMALS - decimals) as u32);
        Ok(amount / factor)
    } else {
        let factor = 10u128.pow((decimals - STABLE_DECIMALS) as u32);
        amount.checked_mul(factor).ok_or(BallastError::Overflow)
    }
}
