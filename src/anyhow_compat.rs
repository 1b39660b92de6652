use crate::catalog;
use crate::error::{Cause, TableError};

impl From<anyhow::Error> for Cause {
    fn from(error: anyhow::Error) -> Self {
        let boxed: Box<dyn std::error::Error + Send + Sync + 'static> = error.into();
        Cause::from(boxed)
    }
}

/// Builds a lock-acquisition failure from an `anyhow::Error`.
///
/// Convenience for lock managers written against `anyhow`; the error is kept
/// as the cause, context chain included.
///
/// # Examples
///
/// ```rust
/// use acid_table_errors::could_not_acquire_lock_anyhow;
///
/// let err = could_not_acquire_lock_anyhow(anyhow::anyhow!("lock 12 timed out"));
/// assert_eq!(err.message(), "Could not acquire lock.");
/// assert_eq!(err.cause().unwrap().to_string(), "lock 12 timed out");
/// ```
pub fn could_not_acquire_lock_anyhow(error: anyhow::Error) -> TableError {
    catalog::could_not_acquire_lock(Some(error.into()))
}
