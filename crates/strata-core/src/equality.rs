//! Pluggable equivalence for identifiers and values.

use std::fmt;
use std::sync::Arc;

/// A shared, pure equivalence predicate over `T`.
pub type Equality<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// The equality policy a DAO is constructed with.
///
/// Decides how identifiers are matched when a listing is scanned, and is
/// available to consumers for value comparisons. The policy is fixed at
/// DAO creation and immutable thereafter.
pub struct EqualityPolicy<Id, Value> {
    equal_id: Equality<Id>,
    equal_value: Equality<Value>,
}

impl<Id, Value> EqualityPolicy<Id, Value> {
    /// Creates a policy from explicit predicates.
    #[must_use]
    pub fn new(equal_id: Equality<Id>, equal_value: Equality<Value>) -> Self {
        Self {
            equal_id,
            equal_value,
        }
    }

    /// Replaces the identifier predicate.
    #[must_use]
    pub fn with_equal_id(mut self, f: impl Fn(&Id, &Id) -> bool + Send + Sync + 'static) -> Self {
        self.equal_id = Arc::new(f);
        self
    }

    /// Replaces the value predicate.
    #[must_use]
    pub fn with_equal_value(
        mut self,
        f: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.equal_value = Arc::new(f);
        self
    }

    /// Tests two identifiers for equivalence.
    #[must_use]
    pub fn id_equals(&self, compared: &Id, comparee: &Id) -> bool {
        (self.equal_id)(compared, comparee)
    }

    /// Tests two values for equivalence.
    #[must_use]
    pub fn value_equals(&self, compared: &Value, comparee: &Value) -> bool {
        (self.equal_value)(compared, comparee)
    }
}

impl<Id, Value> Default for EqualityPolicy<Id, Value>
where
    Id: PartialEq + 'static,
    Value: PartialEq + 'static,
{
    /// Strict equality on both identifiers and values.
    fn default() -> Self {
        Self {
            equal_id: Arc::new(|compared, comparee| compared == comparee),
            equal_value: Arc::new(|compared, comparee| compared == comparee),
        }
    }
}

impl<Id, Value> Clone for EqualityPolicy<Id, Value> {
    fn clone(&self) -> Self {
        Self {
            equal_id: Arc::clone(&self.equal_id),
            equal_value: Arc::clone(&self.equal_value),
        }
    }
}

impl<Id, Value> fmt::Debug for EqualityPolicy<Id, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityPolicy").finish_non_exhaustive()
    }
}
