// crates/ballast-core/src/roles.rs
//
// Role names and the capability-check seam consumed by every ledger.
//
// The full access-control primitive (grant/revoke governance, the timed
// two-step admin transfer) lives outside this workspace; ledgers only ever
// ask "does this account hold this role right now?". `RoleTable` is the
// minimal in-memory implementation used by tests and local wiring.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::address::Address;
use crate::error::BallastError;

/// Named permissions recognized by the ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May change configuration: caps, recipients, delays, pauses, whitelist.
    Admin,
    /// May mint and burn the stable token (held by the collateral ledger).
    Minter,
    /// May mint bounded yield through the reward cap limiter.
    RewardDistributor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Minter => write!(f, "Minter"),
            Role::RewardDistributor => write!(f, "RewardDistributor"),
        }
    }
}

/// Capability check consumed by ledger operations.
pub trait PermissionChecker {
    /// Whether `account` currently holds `role`.
    fn has_permission(&self, role: Role, account: Address) -> bool;
}

/// Require `account` to hold `role`, or fail with `UnauthorizedAccount`.
pub fn ensure_role(
    perms: &dyn PermissionChecker,
    role: Role,
    account: Address,
) -> Result<(), BallastError> {
    if perms.has_permission(role, account) {
        Ok(())
    } else {
        Err(BallastError::UnauthorizedAccount { account, role })
    }
}

/// Minimal in-memory role registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleTable {
    grants: HashSet<(Role, Address)>,
}

impl RoleTable {
    /// Create an empty role table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `role` to `account`.
    pub fn grant(&mut self, role: Role, account: Address) {
        self.grants.insert((role, account));
    }

    /// Revoke `role` from `account`.
    pub fn revoke(&mut self, role: Role, account: Address) {
        self.grants.remove(&(role, account));
    }
}

impl PermissionChecker for RoleTable {
    fn has_permission(&self, role: Role, account: Address) -> bool {
        self.grants.contains(&(role, account))
    }
}
