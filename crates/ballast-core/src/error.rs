// crates/ballast-core/src/error.rs

use thiserror::Error;

use crate::address::Address;
use crate::roles::Role;

/// Workspace-wide error type for the Ballast system.
///
/// One variant per named failure condition. Every rejected precondition
/// surfaces one of these; no failure is silently swallowed, and a failed
/// operation leaves ledger state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallastError {
    // --- authorization ---
    /// Caller does not hold the role required by the operation.
    #[error("unauthorized account {account}: missing role {role}")]
    UnauthorizedAccount { account: Address, role: Role },

    // --- validation ---
    /// An amount parameter was zero where a positive value is required.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// An address parameter was the zero address.
    #[error("address must not be the zero address")]
    ZeroAddress,

    /// Redeeming this stable amount would pay out less than one collateral unit.
    #[error("redeem amount {stable_amount} normalizes to a dust collateral payout")]
    InvalidRedeemAmount { stable_amount: u128 },

    /// First deposit into an empty vault is below the minimum threshold.
    #[error("first deposit {assets} is below the minimum of {minimum}")]
    BelowMinimumDeposit { assets: u128, minimum: u128 },

    /// Attempted to set the reward recipient to the zero address.
    #[error("reward recipient must not be the zero address")]
    InvalidRewardRecipient,

    /// Attempted to set the daily reward cap above the protocol ceiling.
    #[error("daily reward cap {bps} bps exceeds the maximum of {max_bps} bps")]
    ExcessiveRewardCap { bps: u64, max_bps: u64 },

    /// Attempted to set the redemption delay above the protocol ceiling.
    #[error("redemption delay {delay}s exceeds the maximum of {max_delay}s")]
    ExcessiveDelay { delay: u64, max_delay: u64 },

    /// Integer overflow in amount scaling or pricing arithmetic.
    #[error("arithmetic overflow in amount computation")]
    Overflow,

    // --- state conflict ---
    /// Token is already on the collateral whitelist.
    #[error("token {token} is already whitelisted")]
    TokenAlreadyWhitelisted { token: Address },

    /// Token is not on the collateral whitelist.
    #[error("token {token} is not whitelisted")]
    TokenNotWhitelisted { token: Address },

    /// Holder already has a live redemption request.
    #[error("holder {holder} already has a pending redemption")]
    PendingRedemptionExists { holder: Address },

    /// Holder has no live redemption request.
    #[error("holder {holder} has no redemption request")]
    NoRedemptionRequest { holder: Address },

    /// The redemption delay has not elapsed yet.
    #[error("redemption not ready until {unlock_time} (now {now})")]
    RedemptionNotReady { unlock_time: u64, now: u64 },

    // --- capacity / liquidity ---
    /// Reward mint would exceed the rolling daily capacity.
    #[error("reward mint of {amount} exceeds remaining daily capacity {available}")]
    ExceedsDailyRewardCap { amount: u128, available: u128 },

    /// Reward mint amount was zero.
    #[error("reward amount must be greater than zero")]
    ZeroRewardAmount,

    /// Holder balance is short of the requested amount.
    #[error("insufficient balance: requested {requested} but only {available} available")]
    InsufficientBalance { requested: u128, available: u128 },

    /// Unlocked share balance is short of the requested transfer.
    #[error("insufficient unlocked balance: requested {requested} but only {available} unlocked")]
    InsufficientUnlockedBalance { requested: u128, available: u128 },

    /// The dedicated redeem pool holds too little of the collateral token.
    #[error("redeem vault holds {available} of token {token}, requested {requested}")]
    InsufficientRedeemVaultBalance {
        token: Address,
        requested: u128,
        available: u128,
    },

    // --- operational gates ---
    /// Vault deposits are administratively paused.
    #[error("deposits are paused")]
    DepositsPaused,

    /// Vault redemptions are administratively paused.
    #[error("redemptions are paused")]
    RedemptionsPaused,

    // --- lifecycle ---
    /// The component was already initialized.
    #[error("already initialized")]
    InvalidInitialization,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_values() {
        let err = BallastError::InsufficientBalance {
            requested: 500,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "insufficient balance: requested 500 but only 100 available"
        );

        let err = BallastError::ExcessiveRewardCap {
            bps: 501,
            max_bps: 500,
        };
        assert!(err.to_string().contains("501"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_unauthorized_message_names_role() {
        let err = BallastError::UnauthorizedAccount {
            account: Address::zero(),
            role: Role::RewardDistributor,
        };
        assert!(err.to_string().contains("RewardDistributor"));
    }
}
