// crates/ballast-core/src/lib.rs
//
// ballast-core: Core types, errors, and collaborator interfaces for the
// Ballast stable-token system.
//
// This is the leaf crate the ledger crates depend on. It defines addresses,
// stable-token units, overflow-safe math, the role-check and collateral-bank
// seams, and the single workspace error type.

pub mod address;
pub mod bank;
pub mod error;
pub mod math;
pub mod roles;
pub mod time;
pub mod token;

// Re-export key types for ergonomic access from downstream crates.
pub use address::Address;
pub use bank::{CollateralBank, TokenBank};
pub use error::BallastError;
pub use math::{bps_of, mul_div, BPS_DENOMINATOR};
pub use roles::{ensure_role, PermissionChecker, Role, RoleTable};
pub use time::{unix_now, Timestamp, SECONDS_PER_DAY};
pub use token::{StableAmount, Units, ONE_STABLE, STABLE_DECIMALS};
