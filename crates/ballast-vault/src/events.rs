// crates/ballast-vault/src/events.rs
//
// Events returned by successful vault mutations.

use serde::{Deserialize, Serialize};

use ballast_core::address::Address;
use ballast_core::time::Timestamp;
use ballast_core::token::Units;

/// Assets were deposited and shares minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub holder: Address,
    pub assets: Units,
    pub shares: u128,
}

/// A redemption request was opened and shares locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemRequested {
    pub holder: Address,
    pub shares: u128,
    pub unlock_time: Timestamp,
}

/// A matured redemption request was completed: shares burned, assets paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemCompleted {
    pub holder: Address,
    pub shares: u128,
    pub assets: Units,
}

/// A redemption request was cancelled and its shares unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemCancelled {
    pub holder: Address,
    pub shares: u128,
}

/// The redemption delay changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionDelayUpdated {
    pub old_delay: u64,
    pub new_delay: u64,
}

/// The deposits-paused flag changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositsPausedUpdated {
    pub paused: bool,
}

/// The redemptions-paused flag changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionsPausedUpdated {
    pub paused: bool,
}
