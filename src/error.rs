use crate::analysis::AnalysisError;
use crate::transaction::TransactionError;
use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Error values produced by the table-transaction client.
///
/// Every variant carries a human readable message. Two variants wrap richer
/// types: [`TransactionError`] for failures tied to a transaction id, and
/// [`AnalysisError`] for query-analysis failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableError {
    /// A caller-supplied argument or parameter is unusable
    #[error("{message}")]
    InvalidArgument { message: String },

    /// The requested operation is not supported by the connector
    #[error("{message}")]
    UnsupportedOperation { message: String },

    /// A failure detected while the connector was running
    #[error("{message}")]
    RuntimeFailure {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    /// A failure bound to a specific transaction and table
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// A semantic failure found while analysing a query
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl TableError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    pub(crate) fn runtime(message: impl Into<String>) -> Self {
        Self::RuntimeFailure {
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn runtime_with_cause(message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::RuntimeFailure {
            message: message.into(),
            cause,
        }
    }

    /// Returns the discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::RuntimeFailure { .. } => ErrorKind::RuntimeFailure,
            Self::Transaction(_) => ErrorKind::Transaction,
            Self::Analysis(_) => ErrorKind::Analysis,
        }
    }

    /// Returns the bare message, without position or plan annotations.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message }
            | Self::UnsupportedOperation { message }
            | Self::RuntimeFailure { message, .. } => message,
            Self::Transaction(e) => e.message(),
            Self::Analysis(e) => e.message(),
        }
    }

    /// Returns the wrapped cause, if this kind carries one.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::RuntimeFailure { cause, .. } => cause.as_ref(),
            Self::Analysis(e) => e.cause(),
            _ => None,
        }
    }

    /// Returns the [`TransactionError`] when this is the `Transaction` kind.
    pub fn as_transaction(&self) -> Option<&TransactionError> {
        match self {
            Self::Transaction(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the [`AnalysisError`] when this is the `Analysis` kind.
    pub fn as_analysis(&self) -> Option<&AnalysisError> {
        match self {
            Self::Analysis(e) => Some(e),
            _ => None,
        }
    }
}

/// Discriminant of [`TableError`], for branching at catch sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedOperation,
    RuntimeFailure,
    Transaction,
    Analysis,
}

impl ErrorKind {
    /// Snake-case name, as used in logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::RuntimeFailure => "runtime_failure",
            Self::Transaction => "transaction",
            Self::Analysis => "analysis",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wrapped underlying error kept for diagnostic traversal.
///
/// The wrapped error is shared, never mutated after construction. Two causes
/// are equal when they render the same text; their own sources are not
/// compared.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wraps `error` as a cause.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Returns the wrapped error.
    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Cause {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }
}

impl From<TableError> for Cause {
    fn from(error: TableError) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_string() == other.to_string()
    }
}

impl Serialize for Cause {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_kind_and_message() {
        let err = TableError::invalid_argument("bad");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "bad");
        assert_eq!(err.to_string(), "bad");
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_runtime_failure_exposes_source() {
        let err = TableError::runtime_with_cause(
            "Could not acquire lock.",
            Some(Cause::new(io::Error::new(io::ErrorKind::TimedOut, "metastore timeout"))),
        );
        let source = err.source().expect("cause should be the source");
        assert_eq!(source.to_string(), "metastore timeout");
        assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("metastore timeout"));
    }

    #[test]
    fn test_cause_equality_by_text() {
        let a = Cause::new(io::Error::new(io::ErrorKind::Other, "boom"));
        let b = Cause::new(io::Error::new(io::ErrorKind::NotFound, "boom"));
        let c = Cause::new(io::Error::new(io::ErrorKind::Other, "bang"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::RuntimeFailure.to_string(), "runtime_failure");
        assert_eq!(ErrorKind::Transaction.as_str(), "transaction");
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<TableError>();
        assert_send_sync::<Cause>();
    }
}
