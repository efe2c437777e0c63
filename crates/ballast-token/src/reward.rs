// crates/ballast-token/src/reward.rs
//
// Rolling daily reward-mint capacity: a leaky bucket with lazy evaluation.
//
// Capacity is a basis-point fraction of the *current* total supply, never
// cached. Consumed capacity regenerates linearly to zero over exactly one
// day; no background timer exists, the decay is computed on every read and
// write from `(used, last_update)`.

use serde::{Deserialize, Serialize};

use ballast_core::math::{bps_of, mul_div};
use ballast_core::time::{Timestamp, SECONDS_PER_DAY};
use ballast_core::token::Units;

/// Ceiling for the daily reward cap: 5% of supply per day.
pub const MAX_DAILY_REWARD_CAP_BPS: u64 = 500;

/// Production default for the daily reward cap: 1% of supply per day.
pub const DEFAULT_DAILY_REWARD_CAP_BPS: u64 = 100;

/// Leaky-bucket state of the reward limiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBucket {
    /// Capacity consumed at `last_update`, in stable base units.
    pub used: Units,
    /// Timestamp of the last consumption.
    pub last_update: Timestamp,
}

/// Mint capacity of a full rolling window at the given supply.
pub fn capacity(total_supply: Units, cap_bps: u64) -> Units {
    bps_of(total_supply, cap_bps)
}

/// Consumed capacity after linear decay over the time since `last_update`.
///
/// Decay is `capacity * elapsed / one_day`, so consumption drains back to
/// zero after exactly one day regardless of how capacity has moved since.
pub fn decayed_used(bucket: &RewardBucket, capacity: Units, now: Timestamp) -> Units {
    let elapsed = now.saturating_sub(bucket.last_update);
    if elapsed >= SECONDS_PER_DAY {
        return 0;
    }
    // elapsed < one day, so decay < capacity and the division cannot fail;
    // saturate to full decay on the unreachable arm.
    let decay =
        mul_div(capacity, elapsed as u128, SECONDS_PER_DAY as u128).unwrap_or(capacity);
    bucket.used.saturating_sub(decay)
}

/// Remaining mintable amount right now.
///
/// Floors at zero: shrinking the cap (or the supply) below what is already
/// consumed never yields a negative availability, it blocks further mints
/// until decay or supply growth raises capacity again.
pub fn available(total_supply: Units, cap_bps: u64, bucket: &RewardBucket, now: Timestamp) -> Units {
    let cap = capacity(total_supply, cap_bps);
    cap.saturating_sub(decayed_used(bucket, cap, now))
}
