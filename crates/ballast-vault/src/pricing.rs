// crates/ballast-vault/src/pricing.rs
//
// Virtual-offset share pricing.
//
// Fixed phantom amounts (1 asset unit, 1000 share units) are added to both
// sides of the conversion ratio. The general formula is then total: it never
// divides by zero in the empty vault, and a first depositor cannot inflate
// the share price with a donation — donated assets raise the price for
// everyone but are never mintable as shares. No empty-vault special case
// exists anywhere.
//
// All conversions round down, so the vault never over-pays.

use ballast_core::error::BallastError;
use ballast_core::math::mul_div;
use ballast_core::token::{Units, ONE_STABLE};

/// Phantom asset units in the conversion ratio.
pub const VIRTUAL_ASSETS: u128 = 1;

/// Phantom share units in the conversion ratio.
pub const VIRTUAL_SHARES: u128 = 1000;

/// Shares minted for a deposit of `assets` against the current totals.
pub fn shares_for_assets(
    assets: Units,
    total_assets: Units,
    total_shares: u128,
) -> Result<u128, BallastError> {
    let shares = total_shares
        .checked_add(VIRTUAL_SHARES)
        .ok_or(BallastError::Overflow)?;
    let denom = total_assets
        .checked_add(VIRTUAL_ASSETS)
        .ok_or(BallastError::Overflow)?;
    mul_div(assets, shares, denom)
}

/// Assets owed for redeeming `shares` against the current totals.
pub fn assets_for_shares(
    shares: u128,
    total_assets: Units,
    total_shares: u128,
) -> Result<Units, BallastError> {
    let assets = total_assets
        .checked_add(VIRTUAL_ASSETS)
        .ok_or(BallastError::Overflow)?;
    let denom = total_shares
        .checked_add(VIRTUAL_SHARES)
        .ok_or(BallastError::Overflow)?;
    mul_div(shares, assets, denom)
}

/// Assets per share, scaled by 10^18.
pub fn share_price(total_assets: Units, total_shares: u128) -> Result<Units, BallastError> {
    assets_for_shares(ONE_STABLE, total_assets, total_shares)
}
