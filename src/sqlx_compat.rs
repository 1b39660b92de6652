use crate::error::{Cause, TableError};

/// Metastore access through SQLx surfaces as a runtime failure that keeps
/// the database error as its cause.
impl From<sqlx::Error> for TableError {
    fn from(error: sqlx::Error) -> Self {
        TableError::runtime_with_cause(format!("Database error: {error}"), Some(Cause::new(error)))
    }
}
