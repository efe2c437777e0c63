// crates/ballast-token/src/lib.rs
//
// ballast-token: the stable token's holder ledger and the rolling daily
// reward cap limiter.
//
// All amounts are 18-decimal base units (u128). The limiter is a lazily
// evaluated leaky bucket: capacity is a basis-point fraction of the live
// total supply and regenerates linearly over one day.

pub mod events;
pub mod ledger;
pub mod reward;

// Re-export key types for ergonomic access from downstream crates.
pub use events::{DailyRewardCapUpdated, RewardMinted, RewardRecipientUpdated};
pub use ledger::StableLedger;
pub use reward::{RewardBucket, DEFAULT_DAILY_REWARD_CAP_BPS, MAX_DAILY_REWARD_CAP_BPS};
