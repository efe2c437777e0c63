// crates/ballast-token/src/events.rs
//
// Events returned by successful stable-ledger mutations.

use serde::{Deserialize, Serialize};

use ballast_core::address::Address;
use ballast_core::token::Units;

/// Bounded yield was minted to the reward recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardMinted {
    pub recipient: Address,
    pub amount: Units,
}

/// The daily reward cap changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRewardCapUpdated {
    pub old_bps: u64,
    pub new_bps: u64,
}

/// The reward recipient changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecipientUpdated {
    pub old: Address,
    pub new: Address,
}
