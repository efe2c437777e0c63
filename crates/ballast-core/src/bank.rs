// crates/ballast-core/src/bank.rs
//
// Seam to the external fungible collateral tokens.
//
// Collateral tokens (USDC-style, arbitrary decimals) are external
// collaborators: the minter only needs their decimals, balances, and a
// balance-moving transfer. `TokenBank` is the in-memory implementation used
// by tests and local wiring; allowances and signed approvals stay outside
// this workspace.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::address::Address;
use crate::error::BallastError;

/// Narrow interface over external fungible collateral tokens.
pub trait CollateralBank {
    /// Native decimal precision of `token`.
    fn decimals(&self, token: Address) -> Result<u8, BallastError>;

    /// Balance of `holder` in `token` base units.
    fn balance_of(&self, token: Address, holder: Address) -> u128;

    /// Move `amount` of `token` from `from` to `to`.
    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), BallastError>;
}

/// Per-token state held by the in-memory bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenState {
    decimals: u8,
    balances: HashMap<Address, u128>,
}

/// In-memory multi-token bank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenBank {
    tokens: HashMap<Address, TokenState>,
}

impl TokenBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token with its native decimal precision.
    /// Overwrites nothing if the token already exists.
    pub fn register_token(&mut self, token: Address, decimals: u8) {
        self.tokens.entry(token).or_insert(TokenState {
            decimals,
            balances: HashMap::new(),
        });
    }

    /// Credit `amount` of `token` to `holder`.
    ///
    /// # Errors
    /// Returns `TokenNotWhitelisted` if the token is not registered.
    pub fn mint(
        &mut self,
        token: Address,
        holder: Address,
        amount: u128,
    ) -> Result<(), BallastError> {
        let state = self
            .tokens
            .get_mut(&token)
            .ok_or(BallastError::TokenNotWhitelisted { token })?;
        let balance = state.balances.entry(holder).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(BallastError::Overflow)?;
        Ok(())
    }
}

impl CollateralBank for TokenBank {
    fn decimals(&self, token: Address) -> Result<u8, BallastError> {
        self.tokens
            .get(&token)
            .map(|s| s.decimals)
            .ok_or(BallastError::TokenNotWhitelisted { token })
    }

    fn balance_of(&self, token: Address, holder: Address) -> u128 {
        self.tokens
            .get(&token)
            .and_then(|s| s.balances.get(&holder))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), BallastError> {
        let state = self
            .tokens
            .get_mut(&token)
            .ok_or(BallastError::TokenNotWhitelisted { token })?;
        let from_balance = state.balances.get(&from).copied().unwrap_or(0);
        if amount > from_balance {
            return Err(BallastError::InsufficientBalance {
                requested: amount,
                available: from_balance,
            });
        }
        state.balances.insert(from, from_balance - amount);
        let to_balance = state.balances.entry(to).or_insert(0);
        *to_balance = to_balance
            .checked_add(amount)
            .ok_or(BallastError::Overflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC: Address = Address::from_tag(0xA0);
    const ALICE: Address = Address::from_tag(1);
    const BOB: Address = Address::from_tag(2);

    #[test]
    fn test_register_and_decimals() {
        let mut bank = TokenBank::new();
        bank.register_token(USDC, 6);
        assert_eq!(bank.decimals(USDC).unwrap(), 6);
        assert!(bank.decimals(ALICE).is_err());
    }

    #[test]
    fn test_mint_and_transfer() {
        let mut bank = TokenBank::new();
        bank.register_token(USDC, 6);
        bank.mint(USDC, ALICE, 1_000_000).unwrap();

        bank.transfer(USDC, ALICE, BOB, 400_000).unwrap();
        assert_eq!(bank.balance_of(USDC, ALICE), 600_000);
        assert_eq!(bank.balance_of(USDC, BOB), 400_000);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut bank = TokenBank::new();
        bank.register_token(USDC, 6);
        bank.mint(USDC, ALICE, 100).unwrap();

        let err = bank.transfer(USDC, ALICE, BOB, 101).unwrap_err();
        assert_eq!(
            err,
            BallastError::InsufficientBalance {
                requested: 101,
                available: 100,
            }
        );
        // Failed transfer leaves balances untouched.
        assert_eq!(bank.balance_of(USDC, ALICE), 100);
        assert_eq!(bank.balance_of(USDC, BOB), 0);
    }

    #[test]
    fn test_transfer_unknown_token() {
        let mut bank = TokenBank::new();
        assert!(bank.transfer(USDC, ALICE, BOB, 1).is_err());
    }
}
