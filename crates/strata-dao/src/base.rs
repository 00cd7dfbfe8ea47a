//! The storage-less terminal fallback DAO.

use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use strata_core::{Dao, Entry, EqualityPolicy, StrataError, StrataResult};

/// A DAO with no backing store.
///
/// The listing is always empty, `get` is derived from it (and so always
/// fails not-found), and every mutating operation fails with
/// [`StrataError::Unsupported`]. This is the terminal fallback behaviour:
/// a partially capable DAO (for example a read-only one) defers its
/// unimplemented operations here instead of leaving them undefined.
pub struct BaseDao<Id, Value, Partial = Value> {
    equality: EqualityPolicy<Id, Value>,
    _partial: PhantomData<fn() -> Partial>,
}

impl<Id, Value, Partial> BaseDao<Id, Value, Partial> {
    /// Creates a base DAO with the given equality policy.
    #[must_use]
    pub fn with_equality(equality: EqualityPolicy<Id, Value>) -> Self {
        Self {
            equality,
            _partial: PhantomData,
        }
    }
}

impl<Id, Value, Partial> BaseDao<Id, Value, Partial>
where
    Id: PartialEq + 'static,
    Value: PartialEq + 'static,
{
    /// Creates a base DAO with strict equality.
    #[must_use]
    pub fn new() -> Self {
        Self::with_equality(EqualityPolicy::default())
    }
}

impl<Id, Value, Partial> Default for BaseDao<Id, Value, Partial>
where
    Id: PartialEq + 'static,
    Value: PartialEq + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, Value, Partial> fmt::Debug for BaseDao<Id, Value, Partial> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDao").finish_non_exhaustive()
    }
}

#[async_trait]
impl<Id, Value, Partial> Dao<Id, Value, Partial> for BaseDao<Id, Value, Partial>
where
    Id: Send + Sync,
    Value: Send,
    Partial: Send,
{
    fn equality(&self) -> &EqualityPolicy<Id, Value> {
        &self.equality
    }

    async fn get_all(&self) -> StrataResult<Vec<Entry<Id, Value>>> {
        Ok(Vec::new())
    }

    async fn create(&self, _value: Value) -> StrataResult<Id> {
        Err(StrataError::unsupported("create is not supported"))
    }

    async fn update(&self, _id: &Id, _value: Value, _target: Option<Value>) -> StrataResult<()> {
        Err(StrataError::unsupported("update is not supported"))
    }

    async fn patch(&self, _id: &Id, _partial: Partial, _target: Option<Value>) -> StrataResult<()> {
        Err(StrataError::unsupported("patch is not supported"))
    }

    async fn remove(&self, _id: &Id, _target: Option<Value>) -> StrataResult<()> {
        Err(StrataError::unsupported("remove is not supported"))
    }
}
