// crates/ballast-minter/src/events.rs
//
// Events returned by successful collateral ledger mutations.

use serde::{Deserialize, Serialize};

use ballast_core::address::Address;
use ballast_core::token::Units;

/// Collateral was deposited and stable tokens minted against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub user: Address,
    pub token: Address,
    pub amount: u128,
    pub minted_stable: Units,
}

/// Stable tokens were burned and collateral paid out of the redeem vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redeemed {
    pub user: Address,
    pub token: Address,
    pub stable_amount: Units,
    pub collateral_amount: u128,
}

/// A token joined the collateral whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralTokenAdded {
    pub token: Address,
}

/// A token left the collateral whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralTokenRemoved {
    pub token: Address,
}

/// Collateral was added to the redeem liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemVaultDeposited {
    pub token: Address,
    pub amount: u128,
}

/// Collateral was withdrawn from the redeem liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemVaultWithdrawn {
    pub token: Address,
    pub amount: u128,
    pub to: Address,
}

/// The treasury vault address changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryVaultUpdated {
    pub old: Address,
    pub new: Address,
}
