//! # Strata Core
//!
//! Core types, traits, and error definitions for Strata.
//! This crate carries the storage-agnostic DAO contract and the
//! supporting vocabulary shared by every implementation crate:
//! the [`Dao`] trait, the [`Entry`] listing pair, the pluggable
//! [`EqualityPolicy`], and the [`StrataError`] failure taxonomy.

pub mod entry;
pub mod equality;
pub mod error;
pub mod result;
pub mod traits;

pub use entry::*;
pub use equality::*;
pub use error::*;
pub use result::*;
pub use traits::*;
