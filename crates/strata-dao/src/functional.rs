//! The delegate-backed DAO.
//!
//! A [`FunctionalDao`] is assembled from externally supplied async
//! functions, one per operation. Operations without a wired delegate fall
//! back to [`BaseDao`]; mutating operations with one pass an existence
//! gate first, so a delegate only ever observes identifiers that resolve.

use crate::base::BaseDao;
use async_trait::async_trait;
use std::fmt;
use strata_core::{BoxFuture, Dao, Entry, EqualityPolicy, StrataError, StrataResult};
use tracing::debug;

/// Supplies every entry of the backing store.
pub type GetAllFn<Id, Value> =
    Box<dyn Fn() -> BoxFuture<'static, Vec<Entry<Id, Value>>> + Send + Sync>;

/// Stores a new value and resolves to its freshly assigned identifier.
/// Solely responsible for validation and identifier assignment.
pub type CreateFn<Id, Value> = Box<dyn Fn(Value) -> BoxFuture<'static, Id> + Send + Sync>;

/// Replaces the value of an identifier known to exist. The last argument
/// is the resolved current value, or the caller-provided target when one
/// was supplied.
pub type UpdateFn<Id, Value> =
    Box<dyn Fn(Id, Value, Value) -> BoxFuture<'static, ()> + Send + Sync>;

/// Merges a partial value over the value of an identifier known to exist.
/// The last argument is the merge base: the resolved current value, or the
/// caller-provided target when one was supplied.
pub type PatchFn<Id, Value, Partial> =
    Box<dyn Fn(Id, Partial, Value) -> BoxFuture<'static, ()> + Send + Sync>;

/// Removes the value of an identifier known to exist.
pub type RemoveFn<Id, Value> = Box<dyn Fn(Id, Value) -> BoxFuture<'static, ()> + Send + Sync>;

/// The delegate slots of a [`FunctionalDao`].
///
/// Each slot either carries the externally supplied implementation of one
/// operation or is empty, in which case the operation falls back to
/// [`BaseDao`].
pub struct DaoOps<Id, Value, Partial = Value> {
    /// Lists every entry of the backing store.
    pub get_all: Option<GetAllFn<Id, Value>>,
    /// Stores a new value.
    pub create: Option<CreateFn<Id, Value>>,
    /// Replaces an existing value.
    pub update: Option<UpdateFn<Id, Value>>,
    /// Merges a partial value over an existing one.
    pub patch: Option<PatchFn<Id, Value, Partial>>,
    /// Removes an existing value.
    pub remove: Option<RemoveFn<Id, Value>>,
}

impl<Id, Value, Partial> Default for DaoOps<Id, Value, Partial> {
    fn default() -> Self {
        Self {
            get_all: None,
            create: None,
            update: None,
            patch: None,
            remove: None,
        }
    }
}

impl<Id, Value, Partial> fmt::Debug for DaoOps<Id, Value, Partial> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaoOps")
            .field("get_all", &self.get_all.is_some())
            .field("create", &self.create.is_some())
            .field("update", &self.update.is_some())
            .field("patch", &self.patch.is_some())
            .field("remove", &self.remove.is_some())
            .finish()
    }
}

/// A DAO defined by the functions implementing its operations.
///
/// Decorates [`BaseDao`] by composition. For `update`, `patch` and
/// `remove`, the identifier is first resolved through [`Dao::get`]; an
/// identifier that does not resolve fails with
/// [`StrataError::NotFound`] and the delegate is never invoked, whatever
/// the backing store itself would have reported. Delegates may therefore
/// assume they are only ever called for identifiers that exist.
///
/// The resolve-then-delegate pair is two separate asynchronous steps; a
/// concurrent actor may mutate the store in between. This layer does not
/// lock against that window.
pub struct FunctionalDao<Id, Value, Partial = Value> {
    base: BaseDao<Id, Value, Partial>,
    ops: DaoOps<Id, Value, Partial>,
}

impl<Id, Value, Partial> FunctionalDao<Id, Value, Partial> {
    /// Creates a functional DAO from an equality policy and delegate
    /// slots.
    #[must_use]
    pub fn new(equality: EqualityPolicy<Id, Value>, ops: DaoOps<Id, Value, Partial>) -> Self {
        Self {
            base: BaseDao::with_equality(equality),
            ops,
        }
    }
}

impl<Id, Value, Partial> FunctionalDao<Id, Value, Partial>
where
    Id: PartialEq + 'static,
    Value: PartialEq + 'static,
{
    /// Starts a builder seeded with strict equality and no delegates.
    #[must_use]
    pub fn builder() -> FunctionalDaoBuilder<Id, Value, Partial> {
        FunctionalDaoBuilder {
            equality: EqualityPolicy::default(),
            ops: DaoOps::default(),
        }
    }
}

impl<Id, Value, Partial> fmt::Debug for FunctionalDao<Id, Value, Partial> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionalDao")
            .field("ops", &self.ops)
            .finish_non_exhaustive()
    }
}

impl<Id, Value, Partial> FunctionalDao<Id, Value, Partial>
where
    Id: Clone + Send + Sync + 'static,
    Value: Send + 'static,
    Partial: Send + 'static,
{
    /// Existence gate: resolves `id` or fails with not-found, keeping the
    /// underlying failure as the cause. Runs before every mutating
    /// delegate call.
    async fn resolve_existing(&self, id: &Id, message: &'static str) -> StrataResult<Value> {
        match self.get(id).await {
            Ok(found) => Ok(found),
            Err(error) => {
                debug!("dao: existence check failed, rejecting");
                Err(StrataError::not_found(message).with_cause(error))
            }
        }
    }
}

#[async_trait]
impl<Id, Value, Partial> Dao<Id, Value, Partial> for FunctionalDao<Id, Value, Partial>
where
    Id: Clone + Send + Sync + 'static,
    Value: Send + 'static,
    Partial: Send + 'static,
{
    fn equality(&self) -> &EqualityPolicy<Id, Value> {
        self.base.equality()
    }

    async fn get_all(&self) -> StrataResult<Vec<Entry<Id, Value>>> {
        match &self.ops.get_all {
            Some(get_all) => get_all().await,
            None => self.base.get_all().await,
        }
    }

    async fn create(&self, value: Value) -> StrataResult<Id> {
        match &self.ops.create {
            Some(create) => {
                debug!("dao: create delegated");
                create(value).await
            }
            None => self.base.create(value).await,
        }
    }

    async fn update(&self, id: &Id, value: Value, target: Option<Value>) -> StrataResult<()> {
        let Some(update) = &self.ops.update else {
            return self.base.update(id, value, target).await;
        };
        let found = self
            .resolve_existing(id, "cannot update a non-existing value")
            .await?;
        debug!("dao: update delegated");
        update(id.clone(), value, target.unwrap_or(found)).await
    }

    async fn patch(&self, id: &Id, partial: Partial, target: Option<Value>) -> StrataResult<()> {
        let Some(patch) = &self.ops.patch else {
            return self.base.patch(id, partial, target).await;
        };
        let found = self
            .resolve_existing(id, "cannot patch a non-existing value")
            .await?;
        debug!("dao: patch delegated");
        patch(id.clone(), partial, target.unwrap_or(found)).await
    }

    async fn remove(&self, id: &Id, target: Option<Value>) -> StrataResult<()> {
        let Some(remove) = &self.ops.remove else {
            return self.base.remove(id, target).await;
        };
        let found = self
            .resolve_existing(id, "cannot remove a non-existing value")
            .await?;
        debug!("dao: remove delegated");
        remove(id.clone(), target.unwrap_or(found)).await
    }
}

/// Builder for [`FunctionalDao`].
///
/// One setter per delegate slot; each boxes the supplied closure. Slots
/// left unset fall back to [`BaseDao`] behaviour.
pub struct FunctionalDaoBuilder<Id, Value, Partial = Value> {
    equality: EqualityPolicy<Id, Value>,
    ops: DaoOps<Id, Value, Partial>,
}

impl<Id, Value, Partial> FunctionalDaoBuilder<Id, Value, Partial> {
    /// Replaces the whole equality policy.
    #[must_use]
    pub fn equality(mut self, equality: EqualityPolicy<Id, Value>) -> Self {
        self.equality = equality;
        self
    }

    /// Replaces the identifier equality predicate.
    #[must_use]
    pub fn equal_id(mut self, f: impl Fn(&Id, &Id) -> bool + Send + Sync + 'static) -> Self {
        self.equality = self.equality.with_equal_id(f);
        self
    }

    /// Replaces the value equality predicate.
    #[must_use]
    pub fn equal_value(
        mut self,
        f: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.equality = self.equality.with_equal_value(f);
        self
    }

    /// Wires the listing delegate.
    #[must_use]
    pub fn get_all(
        mut self,
        f: impl Fn() -> BoxFuture<'static, Vec<Entry<Id, Value>>> + Send + Sync + 'static,
    ) -> Self {
        self.ops.get_all = Some(Box::new(f));
        self
    }

    /// Wires the create delegate.
    #[must_use]
    pub fn create(
        mut self,
        f: impl Fn(Value) -> BoxFuture<'static, Id> + Send + Sync + 'static,
    ) -> Self {
        self.ops.create = Some(Box::new(f));
        self
    }

    /// Wires the update delegate.
    #[must_use]
    pub fn update(
        mut self,
        f: impl Fn(Id, Value, Value) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    ) -> Self {
        self.ops.update = Some(Box::new(f));
        self
    }

    /// Wires the patch delegate.
    #[must_use]
    pub fn patch(
        mut self,
        f: impl Fn(Id, Partial, Value) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    ) -> Self {
        self.ops.patch = Some(Box::new(f));
        self
    }

    /// Wires the remove delegate.
    #[must_use]
    pub fn remove(
        mut self,
        f: impl Fn(Id, Value) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    ) -> Self {
        self.ops.remove = Some(Box::new(f));
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> FunctionalDao<Id, Value, Partial> {
        FunctionalDao::new(self.equality, self.ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn seeded() -> Arc<Mutex<HashMap<String, String>>> {
        let mut entries = HashMap::new();
        entries.insert("Foo".to_string(), "barbar".to_string());
        entries.insert("Bar".to_string(), "foobar".to_string());
        Arc::new(Mutex::new(entries))
    }

    fn listing(
        entries: &Arc<Mutex<HashMap<String, String>>>,
    ) -> impl Fn() -> BoxFuture<'static, Vec<Entry<String, String>>> + Send + Sync + 'static {
        let entries = Arc::clone(entries);
        move || -> BoxFuture<'static, Vec<Entry<String, String>>> {
            let entries = Arc::clone(&entries);
            Box::pin(async move {
                Ok(entries
                    .lock()
                    .unwrap()
                    .iter()
                    .map(|(id, value)| Entry::new(id.clone(), value.clone()))
                    .collect())
            })
        }
    }

    #[tokio::test]
    async fn test_no_delegates_behaves_like_base() {
        let dao = FunctionalDao::<String, String>::builder().build();

        assert!(dao.get_all().await.unwrap().is_empty());
        assert!(dao.get(&"x".to_string()).await.unwrap_err().is_not_found());
        assert!(dao
            .create("bar".to_string())
            .await
            .unwrap_err()
            .is_unsupported());
        assert!(dao
            .update(&"x".to_string(), "bar".to_string(), None)
            .await
            .unwrap_err()
            .is_unsupported());
        assert!(dao
            .patch(&"x".to_string(), "bar".to_string(), None)
            .await
            .unwrap_err()
            .is_unsupported());
        assert!(dao
            .remove(&"x".to_string(), None)
            .await
            .unwrap_err()
            .is_unsupported());
    }

    #[tokio::test]
    async fn test_readonly_dao_lists_and_resolves() {
        let entries = seeded();
        let dao = FunctionalDao::<String, String>::builder()
            .get_all(listing(&entries))
            .build();

        assert_eq!(dao.get_all().await.unwrap().len(), 2);
        assert_eq!(dao.get(&"Foo".to_string()).await.unwrap(), "barbar");

        // Mutators stay unsupported when only the listing is wired.
        assert!(dao
            .remove(&"Foo".to_string(), None)
            .await
            .unwrap_err()
            .is_unsupported());
        assert!(dao
            .update(&"Foo".to_string(), "x".to_string(), None)
            .await
            .unwrap_err()
            .is_unsupported());
    }

    #[tokio::test]
    async fn test_gate_blocks_absent_identifier() {
        let entries = seeded();
        let invocations = Arc::new(AtomicUsize::new(0));

        let remove_entries = Arc::clone(&entries);
        let remove_invocations = Arc::clone(&invocations);
        let dao = FunctionalDao::<String, String>::builder()
            .get_all(listing(&entries))
            .remove(move |id, _found| {
                remove_invocations.fetch_add(1, Ordering::SeqCst);
                let entries = Arc::clone(&remove_entries);
                Box::pin(async move {
                    entries.lock().unwrap().remove(&id);
                    Ok(())
                })
            })
            .build();

        let err = dao.remove(&"Baz".to_string(), None).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
        assert_eq!(entries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_gate_failure_keeps_cause() {
        let entries = seeded();
        let dao = FunctionalDao::<String, String>::builder()
            .get_all(listing(&entries))
            .update(|_id, _value, _found| Box::pin(async { Ok(()) }))
            .build();

        let err = dao
            .update(&"Baz".to_string(), "x".to_string(), None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_delegate_receives_found_value() {
        let entries = seeded();
        let seen = Arc::new(Mutex::new(None));

        let update_seen = Arc::clone(&seen);
        let dao = FunctionalDao::<String, String>::builder()
            .get_all(listing(&entries))
            .update(move |_id, _value, found| {
                *update_seen.lock().unwrap() = Some(found);
                Box::pin(async { Ok(()) })
            })
            .build();

        dao.update(&"Foo".to_string(), "next".to_string(), None)
            .await
            .unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("barbar"));
    }

    #[tokio::test]
    async fn test_delegate_prefers_caller_target() {
        let entries = seeded();
        let seen = Arc::new(Mutex::new(None));

        let update_seen = Arc::clone(&seen);
        let dao = FunctionalDao::<String, String>::builder()
            .get_all(listing(&entries))
            .update(move |_id, _value, found| {
                *update_seen.lock().unwrap() = Some(found);
                Box::pin(async { Ok(()) })
            })
            .build();

        dao.update(
            &"Foo".to_string(),
            "next".to_string(),
            Some("hint".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("hint"));
    }

    #[tokio::test]
    async fn test_custom_id_equality() {
        let entries = seeded();
        let dao = FunctionalDao::<String, String>::builder()
            .equal_id(|a, b| a.eq_ignore_ascii_case(b))
            .get_all(listing(&entries))
            .build();

        assert_eq!(dao.get(&"foo".to_string()).await.unwrap(), "barbar");
    }

    #[test]
    fn test_ops_debug_reports_wired_slots() {
        let ops = DaoOps::<String, String> {
            get_all: Some(Box::new(|| Box::pin(async { Ok(Vec::new()) }))),
            ..DaoOps::default()
        };
        let rendered = format!("{ops:?}");
        assert!(rendered.contains("get_all: true"));
        assert!(rendered.contains("remove: false"));
    }
}
