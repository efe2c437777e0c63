// crates/ballast-vault/src/vault.rs
//
// Share-accounting staking vault over the stable token.
//
// The vault holds stable tokens under its own address and prices shares with
// the virtual-offset formulas in `pricing.rs`. `total_assets` reads the
// vault's stable balance directly — there is no internal asset counter, so
// donations and reward mints to the vault address are reflected in the share
// price automatically.
//
// Redemption runs a per-holder state machine:
//   NoRequest -> Pending(shares, unlock_time) -> {Completed, Cancelled}
// with at most one live request per holder. Pending shares are locked: they
// stay with the holder but cannot be transferred. Completion prices the
// shares at completion time, and burns the shares and clears the request
// before the outbound asset transfer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use ballast_core::address::Address;
use ballast_core::error::BallastError;
use ballast_core::roles::{ensure_role, PermissionChecker, Role};
use ballast_core::time::{Timestamp, SECONDS_PER_DAY};
use ballast_core::token::Units;
use ballast_token::StableLedger;

use crate::events::{
    Deposited, DepositsPausedUpdated, RedeemCancelled, RedeemCompleted, RedeemRequested,
    RedemptionDelayUpdated, RedemptionsPausedUpdated,
};
use crate::pricing;

/// Ceiling for the redemption delay: 30 days.
pub const MAX_REDEMPTION_DELAY: u64 = 30 * SECONDS_PER_DAY;

/// Production default redemption delay: 7 days.
pub const DEFAULT_REDEMPTION_DELAY: u64 = 7 * SECONDS_PER_DAY;

/// Minimum first deposit into an empty vault: 0.001 stable.
/// Guards against a degenerate near-zero first mint.
pub const MIN_INITIAL_DEPOSIT: Units = 1_000_000_000_000_000;

/// A holder's live redemption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRequest {
    /// Shares locked by this request.
    pub shares: u128,
    /// Timestamp at which completion becomes possible.
    pub unlock_time: Timestamp,
}

/// The staking vault ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingVault {
    initialized: bool,
    /// The vault's own identity as a stable-token holder.
    address: Address,
    redemption_delay: u64,
    deposits_paused: bool,
    redemptions_paused: bool,
    total_shares: u128,
    balances: HashMap<Address, u128>,
    locked: HashMap<Address, u128>,
    requests: HashMap<Address, RedemptionRequest>,
}

impl Default for StakingVault {
    fn default() -> Self {
        Self {
            initialized: false,
            address: Address::zero(),
            redemption_delay: 0,
            deposits_paused: false,
            redemptions_paused: false,
            total_shares: 0,
            balances: HashMap::new(),
            locked: HashMap::new(),
            requests: HashMap::new(),
        }
    }
}

impl StakingVault {
    /// Create and initialize a vault in one step.
    pub fn new(address: Address, redemption_delay: u64) -> Result<Self, BallastError> {
        let mut vault = Self::default();
        vault.initialize(address, redemption_delay)?;
        Ok(vault)
    }

    /// One-time initialization.
    ///
    /// # Errors
    /// `InvalidInitialization` on a second call, `ZeroAddress` for a zero
    /// vault identity, `ExcessiveDelay` above the ceiling.
    pub fn initialize(
        &mut self,
        address: Address,
        redemption_delay: u64,
    ) -> Result<(), BallastError> {
        if self.initialized {
            return Err(BallastError::InvalidInitialization);
        }
        if address.is_zero() {
            return Err(BallastError::ZeroAddress);
        }
        if redemption_delay > MAX_REDEMPTION_DELAY {
            return Err(BallastError::ExcessiveDelay {
                delay: redemption_delay,
                max_delay: MAX_REDEMPTION_DELAY,
            });
        }
        self.initialized = true;
        self.address = address;
        self.redemption_delay = redemption_delay;
        Ok(())
    }

    /// Deposit stable assets and mint shares at the current price.
    ///
    /// Shares are priced against the pre-transfer asset total, so the
    /// depositor's own assets do not dilute their mint.
    pub fn deposit(
        &mut self,
        stable: &mut StableLedger,
        holder: Address,
        assets: Units,
    ) -> Result<Deposited, BallastError> {
        if assets == 0 {
            return Err(BallastError::ZeroAmount);
        }
        if self.deposits_paused {
            return Err(BallastError::DepositsPaused);
        }
        if self.total_shares == 0 && assets < MIN_INITIAL_DEPOSIT {
            return Err(BallastError::BelowMinimumDeposit {
                assets,
                minimum: MIN_INITIAL_DEPOSIT,
            });
        }

        let total_assets = self.total_assets(stable);
        let shares = pricing::shares_for_assets(assets, total_assets, self.total_shares)?;
        if shares == 0 {
            // Rounded to dust: refuse rather than take assets for nothing.
            return Err(BallastError::ZeroAmount);
        }
        let new_total = self
            .total_shares
            .checked_add(shares)
            .ok_or(BallastError::Overflow)?;

        stable.transfer(holder, self.address, assets)?;
        self.total_shares = new_total;
        *self.balances.entry(holder).or_insert(0) += shares;

        tracing::info!(%holder, assets, shares, "vault deposit");
        Ok(Deposited {
            holder,
            assets,
            shares,
        })
    }

    /// Open a redemption request, locking `shares` until it resolves.
    pub fn request_redeem(
        &mut self,
        holder: Address,
        shares: u128,
        now: Timestamp,
    ) -> Result<RedeemRequested, BallastError> {
        if self.redemptions_paused {
            return Err(BallastError::RedemptionsPaused);
        }
        if shares == 0 {
            return Err(BallastError::ZeroAmount);
        }
        let balance = self.balance_of(holder);
        if shares > balance {
            return Err(BallastError::InsufficientBalance {
                requested: shares,
                available: balance,
            });
        }
        if self.requests.contains_key(&holder) {
            return Err(BallastError::PendingRedemptionExists { holder });
        }

        let unlock_time = now + self.redemption_delay;
        *self.locked.entry(holder).or_insert(0) += shares;
        self.requests.insert(holder, RedemptionRequest { shares, unlock_time });

        tracing::info!(%holder, shares, unlock_time, "redemption requested");
        Ok(RedeemRequested {
            holder,
            shares,
            unlock_time,
        })
    }

    /// Complete a matured redemption: burn the locked shares and pay assets
    /// at the redemption-time price.
    pub fn complete_redeem(
        &mut self,
        stable: &mut StableLedger,
        holder: Address,
        now: Timestamp,
    ) -> Result<RedeemCompleted, BallastError> {
        let request = self
            .requests
            .get(&holder)
            .copied()
            .ok_or(BallastError::NoRedemptionRequest { holder })?;
        if now < request.unlock_time {
            return Err(BallastError::RedemptionNotReady {
                unlock_time: request.unlock_time,
                now,
            });
        }

        let shares = request.shares;
        let assets =
            pricing::assets_for_shares(shares, self.total_assets(stable), self.total_shares)?;

        // Burn and clear the lock before the outbound transfer.
        let balance = self.balance_of(holder);
        debug_assert!(shares <= balance);
        self.balances.insert(holder, balance - shares);
        self.total_shares -= shares;
        self.clear_lock(holder, shares);
        self.requests.remove(&holder);

        stable.transfer(self.address, holder, assets)?;

        tracing::info!(%holder, shares, assets, "redemption completed");
        Ok(RedeemCompleted {
            holder,
            shares,
            assets,
        })
    }

    /// Cancel a live redemption request, unlocking its shares.
    pub fn cancel_redeem(&mut self, holder: Address) -> Result<RedeemCancelled, BallastError> {
        let request = self
            .requests
            .remove(&holder)
            .ok_or(BallastError::NoRedemptionRequest { holder })?;
        self.clear_lock(holder, request.shares);

        tracing::info!(%holder, shares = request.shares, "redemption cancelled");
        Ok(RedeemCancelled {
            holder,
            shares: request.shares,
        })
    }

    /// Transfer unlocked shares between holders.
    ///
    /// Locked shares remain a claim bound to the original holder until their
    /// request resolves.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        shares: u128,
    ) -> Result<(), BallastError> {
        let unlocked = self.balance_of(from) - self.locked_shares(from);
        if shares > unlocked {
            return Err(BallastError::InsufficientUnlockedBalance {
                requested: shares,
                available: unlocked,
            });
        }
        let from_balance = self.balance_of(from);
        self.balances.insert(from, from_balance - shares);
        *self.balances.entry(to).or_insert(0) += shares;
        Ok(())
    }

    /// Change the redemption delay. Caller must hold the Admin role.
    pub fn set_redemption_delay(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        new_delay: u64,
    ) -> Result<RedemptionDelayUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if new_delay > MAX_REDEMPTION_DELAY {
            return Err(BallastError::ExcessiveDelay {
                delay: new_delay,
                max_delay: MAX_REDEMPTION_DELAY,
            });
        }
        let old_delay = self.redemption_delay;
        self.redemption_delay = new_delay;
        tracing::info!(old_delay, new_delay, "redemption delay updated");
        Ok(RedemptionDelayUpdated {
            old_delay,
            new_delay,
        })
    }

    /// Pause or resume deposits. Caller must hold the Admin role.
    pub fn set_deposits_paused(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        paused: bool,
    ) -> Result<DepositsPausedUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        self.deposits_paused = paused;
        tracing::info!(paused, "deposits paused flag updated");
        Ok(DepositsPausedUpdated { paused })
    }

    /// Pause or resume redemption requests. Caller must hold the Admin role.
    pub fn set_redemptions_paused(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        paused: bool,
    ) -> Result<RedemptionsPausedUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        self.redemptions_paused = paused;
        tracing::info!(paused, "redemptions paused flag updated");
        Ok(RedemptionsPausedUpdated { paused })
    }

    /// The vault's stable-token balance — donations included.
    pub fn total_assets(&self, stable: &StableLedger) -> Units {
        stable.balance_of(self.address)
    }

    /// Assets per share, scaled by 10^18.
    pub fn share_price(&self, stable: &StableLedger) -> Result<Units, BallastError> {
        pricing::share_price(self.total_assets(stable), self.total_shares)
    }

    /// Shares a deposit of `assets` would mint right now.
    pub fn preview_deposit(
        &self,
        stable: &StableLedger,
        assets: Units,
    ) -> Result<u128, BallastError> {
        pricing::shares_for_assets(assets, self.total_assets(stable), self.total_shares)
    }

    /// Assets redeeming `shares` would pay right now.
    pub fn preview_redeem(
        &self,
        stable: &StableLedger,
        shares: u128,
    ) -> Result<Units, BallastError> {
        pricing::assets_for_shares(shares, self.total_assets(stable), self.total_shares)
    }

    /// Total shares outstanding.
    pub fn total_shares(&self) -> u128 {
        self.total_shares
    }

    /// Share balance of `holder` (locked shares included).
    pub fn balance_of(&self, holder: Address) -> u128 {
        self.balances.get(&holder).copied().unwrap_or(0)
    }

    /// Shares of `holder` locked by a pending redemption.
    pub fn locked_shares(&self, holder: Address) -> u128 {
        self.locked.get(&holder).copied().unwrap_or(0)
    }

    /// The live redemption request of `holder`, if any.
    pub fn redemption_request(&self, holder: Address) -> Option<RedemptionRequest> {
        self.requests.get(&holder).copied()
    }

    /// The vault's stable-token holding address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Current redemption delay in seconds.
    pub fn redemption_delay(&self) -> u64 {
        self.redemption_delay
    }

    /// Whether deposits are paused.
    pub fn deposits_paused(&self) -> bool {
        self.deposits_paused
    }

    /// Whether redemption requests are paused.
    pub fn redemptions_paused(&self) -> bool {
        self.redemptions_paused
    }

    fn clear_lock(&mut self, holder: Address, shares: u128) {
        let locked = self.locked_shares(holder).saturating_sub(shares);
        if locked == 0 {
            self.locked.remove(&holder);
        } else {
            self.locked.insert(holder, locked);
        }
    }
}
