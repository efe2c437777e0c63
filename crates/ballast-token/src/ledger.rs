// crates/ballast-token/src/ledger.rs
//
// The stable token's holder ledger.
//
// Supply invariant: `total_supply` equals the sum of all holder balances at
// all times. Mint and burn are gated on the Minter role (held by the
// collateral ledger); yield minting goes through the rolling daily cap
// limiter in `reward.rs` and is gated on the RewardDistributor role. The
// bucket is charged before the recipient is credited, so a reentrant
// observer during the credit sees already-consumed capacity.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use ballast_core::address::Address;
use ballast_core::error::BallastError;
use ballast_core::roles::{ensure_role, PermissionChecker, Role};
use ballast_core::time::Timestamp;
use ballast_core::token::Units;

use crate::events::{DailyRewardCapUpdated, RewardMinted, RewardRecipientUpdated};
use crate::reward::{self, RewardBucket, MAX_DAILY_REWARD_CAP_BPS};

/// The stable token ledger: holder balances plus reward-limiter state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StableLedger {
    initialized: bool,
    balances: HashMap<Address, Units>,
    total_supply: Units,
    reward_recipient: Address,
    daily_reward_cap_bps: u64,
    bucket: RewardBucket,
}

impl Default for StableLedger {
    fn default() -> Self {
        Self {
            initialized: false,
            balances: HashMap::new(),
            total_supply: 0,
            reward_recipient: Address::zero(),
            daily_reward_cap_bps: 0,
            bucket: RewardBucket::default(),
        }
    }
}

impl StableLedger {
    /// Create and initialize a ledger in one step.
    pub fn new(reward_recipient: Address, daily_reward_cap_bps: u64) -> Result<Self, BallastError> {
        let mut ledger = Self::default();
        ledger.initialize(reward_recipient, daily_reward_cap_bps)?;
        Ok(ledger)
    }

    /// One-time initialization of the reward configuration.
    ///
    /// # Errors
    /// `InvalidInitialization` on a second call, `InvalidRewardRecipient` for
    /// a zero recipient, `ExcessiveRewardCap` above the ceiling.
    pub fn initialize(
        &mut self,
        reward_recipient: Address,
        daily_reward_cap_bps: u64,
    ) -> Result<(), BallastError> {
        if self.initialized {
            return Err(BallastError::InvalidInitialization);
        }
        if reward_recipient.is_zero() {
            return Err(BallastError::InvalidRewardRecipient);
        }
        if daily_reward_cap_bps > MAX_DAILY_REWARD_CAP_BPS {
            return Err(BallastError::ExcessiveRewardCap {
                bps: daily_reward_cap_bps,
                max_bps: MAX_DAILY_REWARD_CAP_BPS,
            });
        }
        self.initialized = true;
        self.reward_recipient = reward_recipient;
        self.daily_reward_cap_bps = daily_reward_cap_bps;
        Ok(())
    }

    /// Mint `amount` to `to`. Caller must hold the Minter role.
    pub fn mint(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        to: Address,
        amount: Units,
    ) -> Result<(), BallastError> {
        ensure_role(perms, Role::Minter, caller)?;
        self.credit(to, amount)?;
        tracing::debug!(%to, amount, total_supply = self.total_supply, "minted stable");
        Ok(())
    }

    /// Burn `amount` from `from`. Caller must hold the Minter role.
    pub fn burn(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        from: Address,
        amount: Units,
    ) -> Result<(), BallastError> {
        ensure_role(perms, Role::Minter, caller)?;
        let balance = self.balance_of(from);
        if amount > balance {
            return Err(BallastError::InsufficientBalance {
                requested: amount,
                available: balance,
            });
        }
        self.balances.insert(from, balance - amount);
        self.total_supply -= amount;
        tracing::debug!(%from, amount, total_supply = self.total_supply, "burned stable");
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// This is the raw ledger move the vault builds on; allowance and permit
    /// mechanics live outside this workspace.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Units,
    ) -> Result<(), BallastError> {
        let from_balance = self.balance_of(from);
        if amount > from_balance {
            return Err(BallastError::InsufficientBalance {
                requested: amount,
                available: from_balance,
            });
        }
        self.balances.insert(from, from_balance - amount);
        let to_balance = self.balances.entry(to).or_insert(0);
        *to_balance = to_balance
            .checked_add(amount)
            .ok_or(BallastError::Overflow)?;
        Ok(())
    }

    /// Mint bounded yield to the reward recipient.
    ///
    /// Caller must hold the RewardDistributor role. Fails `ZeroRewardAmount`
    /// for a zero amount and `ExceedsDailyRewardCap` when the decayed
    /// consumption plus `amount` would exceed the live capacity — including
    /// the zero-supply case, where capacity is zero.
    pub fn mint_reward(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        now: Timestamp,
        amount: Units,
    ) -> Result<RewardMinted, BallastError> {
        ensure_role(perms, Role::RewardDistributor, caller)?;
        if amount == 0 {
            return Err(BallastError::ZeroRewardAmount);
        }

        let capacity = reward::capacity(self.total_supply, self.daily_reward_cap_bps);
        let used = reward::decayed_used(&self.bucket, capacity, now);
        let available = capacity.saturating_sub(used);
        if used.checked_add(amount).is_none() || used + amount > capacity {
            return Err(BallastError::ExceedsDailyRewardCap { amount, available });
        }
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(BallastError::Overflow)?;

        // Charge the bucket before crediting the recipient.
        self.bucket = RewardBucket {
            used: used + amount,
            last_update: now,
        };
        let recipient = self.reward_recipient;
        self.total_supply = new_supply;
        *self.balances.entry(recipient).or_insert(0) += amount;

        tracing::info!(%recipient, amount, "reward minted");
        Ok(RewardMinted { recipient, amount })
    }

    /// Change the daily reward cap. Caller must hold the Admin role.
    ///
    /// Consumed capacity is not reset; a shrink is felt immediately through
    /// the floor-at-zero availability rule.
    pub fn set_daily_reward_cap(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        new_bps: u64,
    ) -> Result<DailyRewardCapUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if new_bps > MAX_DAILY_REWARD_CAP_BPS {
            return Err(BallastError::ExcessiveRewardCap {
                bps: new_bps,
                max_bps: MAX_DAILY_REWARD_CAP_BPS,
            });
        }
        let old_bps = self.daily_reward_cap_bps;
        self.daily_reward_cap_bps = new_bps;
        tracing::info!(old_bps, new_bps, "daily reward cap updated");
        Ok(DailyRewardCapUpdated { old_bps, new_bps })
    }

    /// Change the reward recipient. Caller must hold the Admin role.
    pub fn set_reward_recipient(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        new: Address,
    ) -> Result<RewardRecipientUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if new.is_zero() {
            return Err(BallastError::InvalidRewardRecipient);
        }
        let old = self.reward_recipient;
        self.reward_recipient = new;
        tracing::info!(%old, %new, "reward recipient updated");
        Ok(RewardRecipientUpdated { old, new })
    }

    /// Total supply of the stable token.
    pub fn total_supply(&self) -> Units {
        self.total_supply
    }

    /// Balance of `holder`.
    pub fn balance_of(&self, holder: Address) -> Units {
        self.balances.get(&holder).copied().unwrap_or(0)
    }

    /// Current reward recipient.
    pub fn reward_recipient(&self) -> Address {
        self.reward_recipient
    }

    /// Current daily reward cap in basis points.
    pub fn daily_reward_cap_bps(&self) -> u64 {
        self.daily_reward_cap_bps
    }

    /// Remaining reward-mintable amount at `now`.
    pub fn available_reward_mint(&self, now: Timestamp) -> Units {
        reward::available(self.total_supply, self.daily_reward_cap_bps, &self.bucket, now)
    }

    fn credit(&mut self, to: Address, amount: Units) -> Result<(), BallastError> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(BallastError::Overflow)?;
        let balance = self.balances.entry(to).or_insert(0);
        // Cannot overflow: the balance is bounded by total_supply.
        *balance += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::DEFAULT_DAILY_REWARD_CAP_BPS;
    use ballast_core::roles::RoleTable;
    use ballast_core::time::SECONDS_PER_DAY;
    use ballast_core::token::ONE_STABLE;

    const ADMIN: Address = Address::from_tag(1);
    const MINTER: Address = Address::from_tag(2);
    const DISTRIBUTOR: Address = Address::from_tag(3);
    const RECIPIENT: Address = Address::from_tag(4);
    const USER: Address = Address::from_tag(5);
    const T0: Timestamp = 1_700_000_000;

    fn setup() -> (StableLedger, RoleTable) {
        let mut roles = RoleTable::new();
        roles.grant(Role::Admin, ADMIN);
        roles.grant(Role::Minter, MINTER);
        roles.grant(Role::RewardDistributor, DISTRIBUTOR);
        let ledger = StableLedger::new(RECIPIENT, DEFAULT_DAILY_REWARD_CAP_BPS).unwrap();
        (ledger, roles)
    }

    fn setup_with_supply(tokens: u64) -> (StableLedger, RoleTable) {
        let (mut ledger, roles) = setup();
        ledger
            .mint(&roles, MINTER, USER, tokens as u128 * ONE_STABLE)
            .unwrap();
        (ledger, roles)
    }

    #[test]
    fn test_initialize_config() {
        let (ledger, _) = setup();
        assert_eq!(ledger.reward_recipient(), RECIPIENT);
        assert_eq!(ledger.daily_reward_cap_bps(), 100);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_reinitialize_fails() {
        let (mut ledger, _) = setup();
        assert_eq!(
            ledger.initialize(RECIPIENT, 100).unwrap_err(),
            BallastError::InvalidInitialization
        );
    }

    #[test]
    fn test_initialize_rejects_zero_recipient() {
        assert_eq!(
            StableLedger::new(Address::zero(), 100).unwrap_err(),
            BallastError::InvalidRewardRecipient
        );
    }

    #[test]
    fn test_initialize_rejects_excessive_cap() {
        assert!(matches!(
            StableLedger::new(RECIPIENT, MAX_DAILY_REWARD_CAP_BPS + 1).unwrap_err(),
            BallastError::ExcessiveRewardCap { .. }
        ));
    }

    #[test]
    fn test_mint_requires_minter_role() {
        let (mut ledger, roles) = setup();
        // Neither a stranger nor the admin may mint.
        assert!(matches!(
            ledger.mint(&roles, USER, USER, ONE_STABLE).unwrap_err(),
            BallastError::UnauthorizedAccount { .. }
        ));
        assert!(matches!(
            ledger.mint(&roles, ADMIN, USER, ONE_STABLE).unwrap_err(),
            BallastError::UnauthorizedAccount { .. }
        ));
    }

    #[test]
    fn test_mint_and_burn_track_supply() {
        let (mut ledger, roles) = setup();
        ledger.mint(&roles, MINTER, USER, 1000 * ONE_STABLE).unwrap();
        assert_eq!(ledger.balance_of(USER), 1000 * ONE_STABLE);
        assert_eq!(ledger.total_supply(), 1000 * ONE_STABLE);

        ledger.burn(&roles, MINTER, USER, 400 * ONE_STABLE).unwrap();
        assert_eq!(ledger.balance_of(USER), 600 * ONE_STABLE);
        assert_eq!(ledger.total_supply(), 600 * ONE_STABLE);
    }

    #[test]
    fn test_burn_insufficient_balance() {
        let (mut ledger, roles) = setup();
        ledger.mint(&roles, MINTER, USER, 100).unwrap();
        assert_eq!(
            ledger.burn(&roles, MINTER, USER, 101).unwrap_err(),
            BallastError::InsufficientBalance {
                requested: 101,
                available: 100,
            }
        );
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn test_transfer() {
        let (mut ledger, roles) = setup();
        ledger.mint(&roles, MINTER, USER, 500 * ONE_STABLE).unwrap();
        ledger.transfer(USER, RECIPIENT, 200 * ONE_STABLE).unwrap();
        assert_eq!(ledger.balance_of(USER), 300 * ONE_STABLE);
        assert_eq!(ledger.balance_of(RECIPIENT), 200 * ONE_STABLE);
        assert_eq!(ledger.total_supply(), 500 * ONE_STABLE);

        assert!(ledger.transfer(USER, RECIPIENT, 301 * ONE_STABLE).is_err());
    }

    #[test]
    fn test_mint_reward_requires_distributor_role() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        assert!(matches!(
            ledger
                .mint_reward(&roles, USER, T0, 100 * ONE_STABLE)
                .unwrap_err(),
            BallastError::UnauthorizedAccount { .. }
        ));
    }

    #[test]
    fn test_mint_reward_zero_amount() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        assert_eq!(
            ledger.mint_reward(&roles, DISTRIBUTOR, T0, 0).unwrap_err(),
            BallastError::ZeroRewardAmount
        );
    }

    #[test]
    fn test_mint_reward_credits_recipient() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        let amount = 1_000 * ONE_STABLE;
        let event = ledger.mint_reward(&roles, DISTRIBUTOR, T0, amount).unwrap();
        assert_eq!(
            event,
            RewardMinted {
                recipient: RECIPIENT,
                amount,
            }
        );
        assert_eq!(ledger.balance_of(RECIPIENT), amount);
        assert_eq!(ledger.total_supply(), 1_001_000 * ONE_STABLE);
    }

    #[test]
    fn test_mint_reward_exceeding_cap() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        // Capacity at 100 bps of 1,000,000 is 10,000 tokens.
        assert!(matches!(
            ledger
                .mint_reward(&roles, DISTRIBUTOR, T0, 10_001 * ONE_STABLE)
                .unwrap_err(),
            BallastError::ExceedsDailyRewardCap { .. }
        ));
    }

    #[test]
    fn test_multiple_mints_within_cap() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 5_000 * ONE_STABLE)
            .unwrap();
        // The first mint grew the supply, so a second 5,000 still fits.
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 5_000 * ONE_STABLE)
            .unwrap();
    }

    #[test]
    fn test_mint_reward_zero_supply() {
        let (mut ledger, roles) = setup();
        assert!(matches!(
            ledger.mint_reward(&roles, DISTRIBUTOR, T0, 1).unwrap_err(),
            BallastError::ExceedsDailyRewardCap { .. }
        ));
    }

    #[test]
    fn test_available_after_partial_usage() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 5_000 * ONE_STABLE)
            .unwrap();
        // Capacity is recomputed against the grown supply of 1,005,000.
        let expected = 10_050 * ONE_STABLE - 5_000 * ONE_STABLE;
        assert_eq!(ledger.available_reward_mint(T0), expected);
    }

    #[test]
    fn test_capacity_recovers_continuously() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 10_000 * ONE_STABLE)
            .unwrap();
        // Supply is now 1,010,000, capacity 10,100.
        assert_eq!(ledger.available_reward_mint(T0), 100 * ONE_STABLE);

        // Half a day in, half the capacity has regenerated on top.
        let half_day = ledger.available_reward_mint(T0 + SECONDS_PER_DAY / 2);
        assert_eq!(half_day, (10_100 - 10_000 + 5_050) * ONE_STABLE);

        // A full day restores the entire capacity.
        assert_eq!(
            ledger.available_reward_mint(T0 + SECONDS_PER_DAY),
            10_100 * ONE_STABLE
        );
    }

    #[test]
    fn test_availability_non_decreasing_without_mints() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 7_000 * ONE_STABLE)
            .unwrap();
        let mut prev = 0;
        for hour in 0..30 {
            let avail = ledger.available_reward_mint(T0 + hour * 3_600);
            assert!(avail >= prev);
            prev = avail;
        }
    }

    #[test]
    fn test_cap_reduction_floors_availability_at_zero() {
        let (mut ledger, roles) = setup_with_supply(1_000_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, 5_000 * ONE_STABLE)
            .unwrap();

        let event = ledger.set_daily_reward_cap(&roles, ADMIN, 10).unwrap();
        assert_eq!(
            event,
            DailyRewardCapUpdated {
                old_bps: 100,
                new_bps: 10,
            }
        );

        assert_eq!(ledger.available_reward_mint(T0), 0);
        assert!(matches!(
            ledger
                .mint_reward(&roles, DISTRIBUTOR, T0, ONE_STABLE)
                .unwrap_err(),
            BallastError::ExceedsDailyRewardCap { .. }
        ));
    }

    #[test]
    fn test_set_daily_reward_cap_bounds_and_auth() {
        let (mut ledger, roles) = setup();
        assert!(matches!(
            ledger
                .set_daily_reward_cap(&roles, ADMIN, MAX_DAILY_REWARD_CAP_BPS + 1)
                .unwrap_err(),
            BallastError::ExcessiveRewardCap { .. }
        ));
        assert!(matches!(
            ledger.set_daily_reward_cap(&roles, USER, 50).unwrap_err(),
            BallastError::UnauthorizedAccount { .. }
        ));
        ledger.set_daily_reward_cap(&roles, ADMIN, 50).unwrap();
        assert_eq!(ledger.daily_reward_cap_bps(), 50);
    }

    #[test]
    fn test_set_reward_recipient() {
        let (mut ledger, roles) = setup();
        let event = ledger.set_reward_recipient(&roles, ADMIN, USER).unwrap();
        assert_eq!(
            event,
            RewardRecipientUpdated {
                old: RECIPIENT,
                new: USER,
            }
        );
        assert_eq!(ledger.reward_recipient(), USER);

        assert_eq!(
            ledger
                .set_reward_recipient(&roles, ADMIN, Address::zero())
                .unwrap_err(),
            BallastError::InvalidRewardRecipient
        );
        assert!(matches!(
            ledger.set_reward_recipient(&roles, USER, USER).unwrap_err(),
            BallastError::UnauthorizedAccount { .. }
        ));
    }

    #[test]
    fn test_state_snapshot_round_trip() {
        let (mut ledger, roles) = setup_with_supply(1_000);
        ledger
            .mint_reward(&roles, DISTRIBUTOR, T0, ONE_STABLE)
            .unwrap();
        let json = serde_json::to_string(&ledger).unwrap();
        let back: StableLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_supply(), ledger.total_supply());
        assert_eq!(back.balance_of(USER), ledger.balance_of(USER));
        assert_eq!(back.available_reward_mint(T0), ledger.available_reward_mint(T0));
    }
}
