// crates/ballast-vault/src/lib.rs
//
// ballast-vault: share-accounting staking vault over the stable token.
//
// Deposits mint shares priced by a virtual-offset formula; withdrawals run a
// two-phase request -> delay -> complete queue with cancellable requests and
// transfer-locked pending shares.

pub mod events;
pub mod pricing;
pub mod vault;

// Re-export key types for ergonomic access from downstream crates.
pub use events::{
    Deposited, DepositsPausedUpdated, RedeemCancelled, RedeemCompleted, RedeemRequested,
    RedemptionDelayUpdated, RedemptionsPausedUpdated,
};
pub use pricing::{VIRTUAL_ASSETS, VIRTUAL_SHARES};
pub use vault::{
    RedemptionRequest, StakingVault, DEFAULT_REDEMPTION_DELAY, MAX_REDEMPTION_DELAY,
    MIN_INITIAL_DEPOSIT,
};
