//! The DAO contract.

use crate::{Entry, EqualityPolicy, StrataError, StrataResult};
use async_trait::async_trait;

/// Identifier-keyed, storage-agnostic asynchronous access to values.
///
/// `Id` designates stored values and only has to support an equality test
/// (through the DAO's [`EqualityPolicy`]). `Value` is the stored payload
/// and is structurally opaque to the DAO. `Partial` is the shape accepted
/// by [`patch`] and defaults to the full value type.
///
/// Every operation is a single-shot asynchronous computation. The DAO
/// itself owns no entries: [`get_all`] re-reads the store on every call
/// and [`get`] is derived from it, so a listing is the sole source of
/// truth per call.
///
/// Duplicate identifiers within one listing are a caller error; [`get`]
/// resolves them first-match-wins in listing order.
///
/// [`get`]: Dao::get
/// [`get_all`]: Dao::get_all
/// [`patch`]: Dao::patch
#[async_trait]
pub trait Dao<Id, Value, Partial = Value>: Send + Sync
where
    Id: Send + Sync,
    Value: Send,
    Partial: Send,
{
    /// The equality policy this DAO was constructed with.
    fn equality(&self) -> &EqualityPolicy<Id, Value>;

    /// Returns a fresh snapshot of every entry.
    ///
    /// Never fails by contract; an empty store yields an empty vector.
    async fn get_all(&self) -> StrataResult<Vec<Entry<Id, Value>>>;

    /// Resolves the value associated with `id`.
    ///
    /// The provided implementation scans [`get_all`](Dao::get_all) for the
    /// first entry whose identifier matches under the identifier equality.
    ///
    /// # Errors
    ///
    /// [`StrataError::NotFound`] when no entry matches.
    async fn get(&self, id: &Id) -> StrataResult<Value> {
        self.get_all()
            .await?
            .into_iter()
            .find(|entry| self.equality().id_equals(&entry.id, id))
            .map(|entry| entry.value)
            .ok_or_else(|| StrataError::not_found("no value for the requested identifier"))
    }

    /// Stores a new value and returns its freshly assigned identifier.
    ///
    /// # Errors
    ///
    /// [`StrataError::InvalidValue`] when the value fails validation,
    /// [`StrataError::Unsupported`] when creation is not implemented.
    async fn create(&self, value: Value) -> StrataResult<Id>;

    /// Replaces the value associated with `id`.
    ///
    /// `target`, when supplied, is the caller's view of the pre-update
    /// value. Callers must not rely on it being required.
    ///
    /// # Errors
    ///
    /// [`StrataError::InvalidValue`], [`StrataError::NotFound`] or
    /// [`StrataError::Unsupported`].
    async fn update(&self, id: &Id, value: Value, target: Option<Value>) -> StrataResult<()>;

    /// Merges `partial` over the value associated with `id` (or over
    /// `target` when supplied) rather than replacing it wholesale.
    ///
    /// # Errors
    ///
    /// [`StrataError::InvalidValue`], [`StrataError::NotFound`] or
    /// [`StrataError::Unsupported`].
    async fn patch(&self, id: &Id, partial: Partial, target: Option<Value>) -> StrataResult<()>;

    /// Removes the value associated with `id`.
    ///
    /// # Errors
    ///
    /// [`StrataError::NotFound`] or [`StrataError::Unsupported`].
    async fn remove(&self, id: &Id, target: Option<Value>) -> StrataResult<()>;
}
