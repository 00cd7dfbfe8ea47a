//! Result type aliases for Strata.

use crate::StrataError;

/// A specialized `Result` type for DAO operations.
pub type StrataResult<T> = Result<T, StrataError>;

/// A boxed future resolving to a [`StrataResult`].
///
/// This is the return type of delegate functions wired into a functional
/// DAO at construction time.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = StrataResult<T>> + Send + 'a>>;
