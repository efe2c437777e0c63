// crates/ballast-core/src/time.rs
//
// Wall-clock timestamps. Every time-dependent operation takes `now`
// explicitly so callers (and tests) control the clock; `unix_now` is the
// production source.

use chrono::Utc;

/// Unix timestamp in whole seconds.
pub type Timestamp = u64;

/// Seconds in one day; the reward limiter's full-recovery window.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Current wall-clock time as a unix timestamp.
pub fn unix_now() -> Timestamp {
    Utc::now().timestamp().max(0) as Timestamp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_now_is_recent() {
        // After 2023-01-01 and monotonically non-decreasing across two reads.
        let a = unix_now();
        let b = unix_now();
        assert!(a >= 1_672_531_200);
        assert!(b >= a);
    }
}
