// crates/ballast-minter/src/lib.rs
//
// ballast-minter: the collateral side of the stable token.
//
// Whitelisted collateral tokens of arbitrary decimals mint the 18-decimal
// stable token one-to-one in value. Deposit inflow goes to a treasury vault;
// redemptions draw on a separately funded redeem-liquidity pool.

pub mod events;
pub mod minter;
pub mod scale;

// Re-export key types for ergonomic access from downstream crates.
pub use events::{
    CollateralTokenAdded, CollateralTokenRemoved, Deposited, RedeemVaultDeposited,
    RedeemVaultWithdrawn, Redeemed, TreasuryVaultUpdated,
};
pub use minter::CollateralLedger;
pub use scale::{from_stable_units, to_stable_units};
