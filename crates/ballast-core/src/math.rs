// crates/ballast-core/src/math.rs
//
// Overflow-safe integer math for amount and share-price computation.
//
// 18-decimal amounts routinely produce products above u128::MAX, so every
// multiply-then-divide goes through a 256-bit intermediate and rounds down.

use primitive_types::U256;

use crate::error::BallastError;

/// Basis-point denominator: 10,000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Compute `a * b / denom` with a 256-bit intermediate, rounding down.
///
/// # Errors
/// Returns `BallastError::Overflow` if `denom` is zero or the result does not
/// fit in u128.
pub fn mul_div(a: u128, b: u128, denom: u128) -> Result<u128, BallastError> {
    if denom == 0 {
        return Err(BallastError::Overflow);
    }
    let wide = U256::from(a) * U256::from(b) / U256::from(denom);
    if wide > U256::from(u128::MAX) {
        return Err(BallastError::Overflow);
    }
    Ok(wide.as_u128())
}

/// Compute `amount * bps / 10_000`, rounding down.
///
/// `bps` must not exceed `BPS_DENOMINATOR`, so the result never exceeds
/// `amount` and always fits.
pub fn bps_of(amount: u128, bps: u64) -> u128 {
    debug_assert!(bps <= BPS_DENOMINATOR);
    let wide = U256::from(amount) * U256::from(bps) / U256::from(BPS_DENOMINATOR);
    wide.as_u128()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_basic() {
        assert_eq!(mul_div(6, 7, 2).unwrap(), 21);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        assert_eq!(mul_div(7, 1, 2).unwrap(), 3);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // 10^24 * 10^24 overflows u128 but the quotient fits.
        let a = 10u128.pow(24);
        assert_eq!(mul_div(a, a, a).unwrap(), a);
    }

    #[test]
    fn test_mul_div_overflowing_result() {
        assert_eq!(
            mul_div(u128::MAX, 2, 1).unwrap_err(),
            BallastError::Overflow
        );
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        assert_eq!(mul_div(1, 1, 0).unwrap_err(), BallastError::Overflow);
    }

    #[test]
    fn test_bps_of() {
        assert_eq!(bps_of(1_000_000, 100), 10_000); // 1%
        assert_eq!(bps_of(1_000_000, 10_000), 1_000_000); // 100%
        assert_eq!(bps_of(1_000_000, 0), 0);
    }

    #[test]
    fn test_bps_of_large_amount() {
        // 10^27 units at 1% — the product overflows u128 without widening.
        let supply = 10u128.pow(27);
        assert_eq!(bps_of(supply, 100), supply / 100);
    }
}
