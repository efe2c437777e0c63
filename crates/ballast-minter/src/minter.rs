// crates/ballast-minter/src/minter.rs
//
// Collateral mint/redeem engine.
//
// Deposited collateral is routed straight to the treasury vault; redemptions
// are paid out of a separate redeem-liquidity pool held at the minter's own
// address. Pool invariant: `redeem_vault_balances[token]` never exceeds the
// minter address's actual balance of `token` in the collateral bank. The pool
// counter is debited before any outbound transfer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use ballast_core::address::Address;
use ballast_core::bank::CollateralBank;
use ballast_core::error::BallastError;
use ballast_core::roles::{ensure_role, PermissionChecker, Role};
use ballast_core::token::Units;
use ballast_token::StableLedger;

use crate::events::{
    CollateralTokenAdded, CollateralTokenRemoved, Deposited, RedeemVaultDeposited,
    RedeemVaultWithdrawn, Redeemed, TreasuryVaultUpdated,
};
use crate::scale::{from_stable_units, to_stable_units};

/// Mint/redeem bridge between whitelisted collateral tokens and the stable
/// token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralLedger {
    initialized: bool,
    address: Address,
    treasury_vault: Address,
    redeem_vault_balances: HashMap<Address, u128>,
    // Ordered whitelist; membership checks scan it, which is fine for the
    // handful of collateral tokens a deployment carries.
    collateral_tokens: Vec<Address>,
}

impl Default for CollateralLedger {
    fn default() -> Self {
        Self {
            initialized: false,
            address: Address::zero(),
            treasury_vault: Address::zero(),
            redeem_vault_balances: HashMap::new(),
            collateral_tokens: Vec::new(),
        }
    }
}

impl CollateralLedger {
    /// Create and initialize a ledger in one step.
    pub fn new(address: Address, treasury_vault: Address) -> Result<Self, BallastError> {
        let mut ledger = Self::default();
        ledger.initialize(address, treasury_vault)?;
        Ok(ledger)
    }

    /// One-time initialization.
    ///
    /// `address` is the ledger's own identity in the collateral bank (it holds
    /// the redeem pool there) and must carry `Role::Minter` on the stable
    /// ledger for deposits and redemptions to work.
    pub fn initialize(
        &mut self,
        address: Address,
        treasury_vault: Address,
    ) -> Result<(), BallastError> {
        if self.initialized {
            return Err(BallastError::InvalidInitialization);
        }
        if address.is_zero() || treasury_vault.is_zero() {
            return Err(BallastError::ZeroAddress);
        }
        self.initialized = true;
        self.address = address;
        self.treasury_vault = treasury_vault;
        Ok(())
    }

    /// Whitelist `token` as accepted collateral. Caller must hold Admin.
    pub fn add_collateral_token(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
    ) -> Result<CollateralTokenAdded, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if token.is_zero() {
            return Err(BallastError::ZeroAddress);
        }
        if self.is_collateral_token(token) {
            return Err(BallastError::TokenAlreadyWhitelisted { token });
        }
        self.collateral_tokens.push(token);
        tracing::info!(%token, "collateral token added");
        Ok(CollateralTokenAdded { token })
    }

    /// Remove `token` from the whitelist. Caller must hold Admin.
    ///
    /// Any redeem-pool balance of the token stays withdrawable through
    /// `withdraw_from_redeem_vault`.
    pub fn remove_collateral_token(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
    ) -> Result<CollateralTokenRemoved, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        let pos = self
            .collateral_tokens
            .iter()
            .position(|&t| t == token)
            .ok_or(BallastError::TokenNotWhitelisted { token })?;
        self.collateral_tokens.remove(pos);
        tracing::info!(%token, "collateral token removed");
        Ok(CollateralTokenRemoved { token })
    }

    /// Deposit `amount` of `token` and mint the normalized stable amount to
    /// `caller`.
    ///
    /// Collateral goes straight to the treasury vault; it does not back the
    /// redeem pool. A deposit whose normalized value rounds to zero is dust
    /// and rejected with `ZeroAmount`.
    pub fn deposit(
        &mut self,
        bank: &mut dyn CollateralBank,
        stable: &mut StableLedger,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
        amount: u128,
    ) -> Result<Deposited, BallastError> {
        if !self.is_collateral_token(token) {
            return Err(BallastError::TokenNotWhitelisted { token });
        }
        if amount == 0 {
            return Err(BallastError::ZeroAmount);
        }
        let decimals = bank.decimals(token)?;
        let minted_stable = to_stable_units(amount, decimals)?;
        if minted_stable == 0 {
            return Err(BallastError::ZeroAmount);
        }
        // Fail every checkable condition before moving collateral, so a mint
        // failure cannot strand funds in the treasury.
        ensure_role(perms, Role::Minter, self.address)?;
        if stable.total_supply().checked_add(minted_stable).is_none() {
            return Err(BallastError::Overflow);
        }

        bank.transfer(token, caller, self.treasury_vault, amount)?;
        stable.mint(perms, self.address, caller, minted_stable)?;

        tracing::info!(user = %caller, %token, amount, minted_stable, "collateral deposited");
        Ok(Deposited {
            user: caller,
            token,
            amount,
            minted_stable,
        })
    }

    /// Burn `stable_amount` from `caller` and pay the normalized collateral
    /// amount out of the redeem pool.
    ///
    /// The pool counter is debited before the outbound transfer. Treasury
    /// holdings never cover redemptions, only the pool does.
    pub fn redeem(
        &mut self,
        bank: &mut dyn CollateralBank,
        stable: &mut StableLedger,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
        stable_amount: Units,
    ) -> Result<Redeemed, BallastError> {
        if !self.is_collateral_token(token) {
            return Err(BallastError::TokenNotWhitelisted { token });
        }
        let decimals = bank.decimals(token)?;
        let collateral_amount = from_stable_units(stable_amount, decimals)?;
        if collateral_amount == 0 {
            return Err(BallastError::InvalidRedeemAmount { stable_amount });
        }
        let pool = self.redeem_vault_balance(token);
        if collateral_amount > pool {
            return Err(BallastError::InsufficientRedeemVaultBalance {
                token,
                requested: collateral_amount,
                available: pool,
            });
        }

        stable.burn(perms, self.address, caller, stable_amount)?;
        self.redeem_vault_balances
            .insert(token, pool - collateral_amount);
        bank.transfer(token, self.address, caller, collateral_amount)?;

        tracing::info!(
            user = %caller,
            %token,
            stable_amount,
            collateral_amount,
            "collateral redeemed"
        );
        Ok(Redeemed {
            user: caller,
            token,
            stable_amount,
            collateral_amount,
        })
    }

    /// Pull `amount` of `token` from `caller` into the redeem pool. Caller
    /// must hold Admin.
    pub fn deposit_to_redeem_vault(
        &mut self,
        bank: &mut dyn CollateralBank,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
        amount: u128,
    ) -> Result<RedeemVaultDeposited, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if !self.is_collateral_token(token) {
            return Err(BallastError::TokenNotWhitelisted { token });
        }
        if amount == 0 {
            return Err(BallastError::ZeroAmount);
        }
        let pool = self.redeem_vault_balance(token);
        let new_pool = pool.checked_add(amount).ok_or(BallastError::Overflow)?;

        bank.transfer(token, caller, self.address, amount)?;
        self.redeem_vault_balances.insert(token, new_pool);

        tracing::info!(%token, amount, pool = new_pool, "redeem vault funded");
        Ok(RedeemVaultDeposited { token, amount })
    }

    /// Withdraw `amount` of `token` from the redeem pool to `to`. Caller must
    /// hold Admin. Works for delisted tokens too.
    pub fn withdraw_from_redeem_vault(
        &mut self,
        bank: &mut dyn CollateralBank,
        perms: &dyn PermissionChecker,
        caller: Address,
        token: Address,
        amount: u128,
        to: Address,
    ) -> Result<RedeemVaultWithdrawn, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if to.is_zero() {
            return Err(BallastError::ZeroAddress);
        }
        if amount == 0 {
            return Err(BallastError::ZeroAmount);
        }
        let pool = self.redeem_vault_balance(token);
        if amount > pool {
            return Err(BallastError::InsufficientRedeemVaultBalance {
                token,
                requested: amount,
                available: pool,
            });
        }

        self.redeem_vault_balances.insert(token, pool - amount);
        bank.transfer(token, self.address, to, amount)?;

        tracing::info!(%token, amount, %to, "redeem vault withdrawal");
        Ok(RedeemVaultWithdrawn { token, amount, to })
    }

    /// Change the treasury vault address. Caller must hold Admin.
    pub fn set_treasury_vault(
        &mut self,
        perms: &dyn PermissionChecker,
        caller: Address,
        new: Address,
    ) -> Result<TreasuryVaultUpdated, BallastError> {
        ensure_role(perms, Role::Admin, caller)?;
        if new.is_zero() {
            return Err(BallastError::ZeroAddress);
        }
        let old = self.treasury_vault;
        self.treasury_vault = new;
        tracing::info!(%old, %new, "treasury vault updated");
        Ok(TreasuryVaultUpdated { old, new })
    }

    /// Whether `token` is whitelisted collateral.
    pub fn is_collateral_token(&self, token: Address) -> bool {
        self.collateral_tokens.contains(&token)
    }

    /// The whitelist in insertion order.
    pub fn collateral_tokens(&self) -> &[Address] {
        &self.collateral_tokens
    }

    /// Redeem-pool balance of `token`.
    pub fn redeem_vault_balance(&self, token: Address) -> u128 {
        self.redeem_vault_balances.get(&token).copied().unwrap_or(0)
    }

    /// Current treasury vault address.
    pub fn treasury_vault(&self) -> Address {
        self.treasury_vault
    }

    /// The ledger's own identity in the collateral bank and stable ledger.
    pub fn address(&self) -> Address {
        self.address
    }
}
