use serde::Serialize;

/// A failure tied to a specific transaction on a specific table.
///
/// Callers inspect [`txn_id`](Self::txn_id) to decide how to recover, for
/// example whether the transaction must be restarted. The id is
/// informational; nothing here checks it for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[error("{message}")]
pub struct TransactionError {
    message: String,
    txn_id: u64,
    table_name: String,
}

impl TransactionError {
    /// Creates an error for transaction `txn_id` on `table_name`.
    pub fn new(message: impl Into<String>, txn_id: u64, table_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            txn_id,
            table_name: table_name.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Id of the transaction the failure belongs to.
    pub fn txn_id(&self) -> u64 {
        self.txn_id
    }

    /// Table the transaction was operating on.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_and_display() {
        let err = TransactionError::new("Transaction 7 is no longer valid", 7, "db.sales");
        assert_eq!(err.txn_id(), 7);
        assert_eq!(err.table_name(), "db.sales");
        assert_eq!(err.to_string(), "Transaction 7 is no longer valid");
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = TransactionError::new("m", 1, "t");
        assert_eq!(a, TransactionError::new("m", 1, "t"));
        assert_ne!(a, TransactionError::new("m", 2, "t"));
        assert_ne!(a, TransactionError::new("m", 1, "u"));
    }
}
