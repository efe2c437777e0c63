// crates/ballast-core/src/token.rs
//
// Stable-token units and display helpers.
//
// The stable token always uses 18 decimals internally. All accounting is
// integer base units (u128) to avoid floating-point precision issues in
// monetary calculations; collateral tokens carry their own native decimals
// and are normalized at the minter boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimals of the stable token.
pub const STABLE_DECIMALS: u8 = 18;

/// Number of base units in one stable token. 1 token = 10^18 units.
pub const ONE_STABLE: u128 = 1_000_000_000_000_000_000;

/// Type alias for stable-token base units.
pub type Units = u128;

/// A stable-token amount, for human-readable display.
///
/// Wraps an amount in base units (the smallest denomination).
///
/// # Example
/// ```
/// use ballast_core::token::{StableAmount, ONE_STABLE};
/// let amount = StableAmount::from_units(3 * ONE_STABLE / 2);
/// assert_eq!(format!("{}", amount), "1.5 STBL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StableAmount {
    /// Amount in base units (1 token = 10^18 units).
    pub units: Units,
}

impl StableAmount {
    /// Create an amount from base units.
    pub fn from_units(units: Units) -> Self {
        Self { units }
    }

    /// Create an amount from a whole-token count.
    pub fn from_tokens(tokens: u64) -> Self {
        Self {
            units: tokens as u128 * ONE_STABLE,
        }
    }

    /// Returns the zero amount.
    pub fn zero() -> Self {
        Self { units: 0 }
    }
}

impl fmt::Display for StableAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.units / ONE_STABLE;
        let frac = self.units % ONE_STABLE;
        if frac == 0 {
            write!(f, "{} STBL", whole)
        } else {
            // Display up to 18 decimal places, trimming trailing zeros
            let frac_str = format!("{:018}", frac);
            let trimmed = frac_str.trim_end_matches('0');
            write!(f, "{}.{} STBL", whole, trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_stable() {
        assert_eq!(ONE_STABLE, 10u128.pow(STABLE_DECIMALS as u32));
    }

    #[test]
    fn test_from_tokens() {
        assert_eq!(StableAmount::from_tokens(1000).units, 1000 * ONE_STABLE);
    }

    #[test]
    fn test_display_whole() {
        assert_eq!(format!("{}", StableAmount::from_tokens(42)), "42 STBL");
    }

    #[test]
    fn test_display_fractional() {
        let amount = StableAmount::from_units(ONE_STABLE / 4);
        assert_eq!(format!("{}", amount), "0.25 STBL");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(format!("{}", StableAmount::zero()), "0 STBL");
    }
}
