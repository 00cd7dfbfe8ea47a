//! # Strata DAO
//!
//! Composable implementations of the [`Dao`] contract:
//!
//! ```text
//! caller
//!   ↓  dyn Dao<Id, Value>
//! FunctionalDao        ← existence gate + delegate dispatch
//!   ↓  DaoOps slots    (Some → delegate, None → fall back)
//! BaseDao              ← terminal fallback: empty listing,
//!                        Unsupported mutators
//! ```
//!
//! [`BaseDao`] is the storage-less default: a DAO that knows nothing
//! lists nothing and supports no mutation. [`FunctionalDao`] wires
//! externally supplied async functions into the contract and enforces
//! uniform not-found semantics before any mutating delegate runs.
//!
//! [`Dao`]: strata_core::Dao

pub mod base;
pub mod functional;

pub use base::BaseDao;
pub use functional::{
    CreateFn, DaoOps, FunctionalDao, FunctionalDaoBuilder, GetAllFn, PatchFn, RemoveFn, UpdateFn,
};
