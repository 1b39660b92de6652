//! Factories for every failure condition raised by the ACID table connector.
//!
//! Each function builds a fresh [`TableError`] from its arguments and returns
//! it; raising and propagating it is the caller's job. Nothing here performs
//! I/O, logs or validates: any input, empty strings included, yields an
//! error value.
//!
//! ```rust
//! use acid_table_errors::{catalog, ErrorKind};
//!
//! let err = catalog::txn_outdated(42, "sales.orders");
//! assert_eq!(err.kind(), ErrorKind::Transaction);
//! assert_eq!(err.as_transaction().map(|t| t.txn_id()), Some(42));
//! ```

use crate::analysis::AnalysisError;
use crate::error::{Cause, TableError};
use crate::format::{format_column, format_column_list};
use crate::transaction::TransactionError;
use serde::Serialize;
use std::fmt;

/// How a batch write treats data already present in the target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SaveMode {
    Append,
    Overwrite,
    ErrorIfExists,
    Ignore,
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Append => "Append",
            Self::Overwrite => "Overwrite",
            Self::ErrorIfExists => "ErrorIfExists",
            Self::Ignore => "Ignore",
        };
        f.write_str(name)
    }
}

/// `InvalidArgument`: the `table` option was not supplied.
pub fn table_not_specified() -> TableError {
    TableError::invalid_argument("'table' is not specified in parameters")
}

/// `UnsupportedOperation`: `function` cannot be called from `caller`.
pub fn unsupported_function(function: &str, caller: &str) -> TableError {
    TableError::unsupported_operation(format!("Unsupported Function - {function} with {caller}"))
}

/// `RuntimeFailure`: `operation` is not a known write operation.
pub fn invalid_operation_type(operation: &str) -> TableError {
    TableError::runtime(format!("Invalid operation type - {operation}"))
}

/// `RuntimeFailure`: the batch writer does not handle `mode`.
pub fn unsupported_save_mode(mode: SaveMode) -> TableError {
    TableError::runtime(format!("Unsupported save mode - {mode}"))
}

/// `RuntimeFailure`: `operation` is not allowed on an insert-only table.
pub fn unsupported_operation_insert_only_table(operation: &str, table: &str) -> TableError {
    TableError::runtime(format!(
        "Unsupported operation type - {operation} for InsertOnly table {table}"
    ))
}

/// `RuntimeFailure`: `operation` is not allowed on a bucketed table.
pub fn unsupported_operation_bucketed_table(operation: &str, table: &str) -> TableError {
    TableError::runtime(format!(
        "Unsupported operation type - {operation} for Bucketed table {table}"
    ))
}

/// `InvalidArgument`: `table` is not transactional.
pub fn table_not_acid(table: &str) -> TableError {
    TableError::invalid_argument(format!("table {table} is not an ACID table"))
}

/// `RuntimeFailure`: lock acquisition failed, optionally because of `cause`.
pub fn could_not_acquire_lock(cause: Option<Cause>) -> TableError {
    TableError::runtime_with_cause("Could not acquire lock.", cause)
}

/// `RuntimeFailure`: lock acquisition ended in a non-acquired lock `state`.
pub fn could_not_acquire_lock_state(state: &str) -> TableError {
    TableError::runtime(format!("Could not acquire lock. Lock State: {state}"))
}

/// `RuntimeFailure`: `txn_id` was already committed or aborted.
pub fn txn_already_closed(txn_id: u64) -> TableError {
    TableError::runtime(format!("Transaction {txn_id} is already closed"))
}

/// `RuntimeFailure`: a transaction is already open as `txn_id`.
pub fn txn_already_open(txn_id: u64) -> TableError {
    TableError::runtime(format!("Transaction already opened. Existing txnId: {txn_id}"))
}

/// `RuntimeFailure`: no transaction was begun on `table`.
pub fn txn_not_started(table: &str) -> TableError {
    TableError::runtime(format!("Transaction on {table} not started"))
}

/// `RuntimeFailure`: no current transaction.
pub fn txn_no_transaction() -> TableError {
    TableError::runtime("No transaction found")
}

/// `RuntimeFailure`: no snapshot `snapshot_id` exists for the table.
pub fn table_snapshot_non_existent(snapshot_id: u64) -> TableError {
    TableError::runtime(format!("Table snapshot {snapshot_id} does not exist"))
}

/// `RuntimeFailure`: a write id was requested for `table` outside a transaction.
pub fn table_write_id_before_txn_start(table: &str) -> TableError {
    TableError::runtime(format!("Write id requested for table {table} before txn was started"))
}

/// `RuntimeFailure`: `txn_id` was handed out while still active;
/// `active_txns` is listed in the order given.
pub fn repeated_txn_id(txn_id: u64, active_txns: &[u64]) -> TableError {
    let active: Vec<String> = active_txns.iter().map(u64::to_string).collect();
    TableError::runtime(format!(
        "Repeated transaction id {txn_id}, active transactions are [{}]",
        active.join(",")
    ))
}

/// `Analysis`: streaming writes only accept the Append output mode.
pub fn unsupported_streaming_output_mode(mode: &str) -> TableError {
    AnalysisError::new(format!(
        "mode: {mode} not supported. Only Append mode is supported for Streaming"
    ))
    .into()
}

/// `Analysis`: an UPDATE sets `column`, which is not among `columns`.
pub fn update_set_column_not_found<S: AsRef<str>>(column: &str, columns: &[S]) -> TableError {
    AnalysisError::new(format!(
        "SET column {} not found given columns: {}.",
        format_column(column),
        format_column_list(columns)
    ))
    .into()
}

/// `Analysis`: an UPDATE tried to SET partition columns, which cannot be
/// rewritten in place.
pub fn update_on_partition<S: AsRef<str>>(columns: &[S], table: &str) -> TableError {
    let message = match columns {
        [column] => format!(
            "SET column: {} is partition column in table: {table}",
            column.as_ref()
        ),
        _ => {
            let names: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
            format!(
                "SET columns: {} are partition columns in table: {table}",
                names.join(",")
            )
        }
    };
    AnalysisError::new(message).into()
}

/// `Transaction`: `txn_id` on `table` is stale and must be restarted.
pub fn txn_outdated(txn_id: u64, table: &str) -> TableError {
    TransactionError::new(format!("Transaction {txn_id} is no longer valid"), txn_id, table).into()
}

/// `RuntimeFailure`: reading table data failed with `cause`.
pub fn unexpected_read_error(cause: &str) -> TableError {
    TableError::runtime(format!("Unexpected error while reading the ACID table data: {cause}"))
}

/// `Analysis`: a MERGE statement failed validation.
pub fn merge_validation_error(cause: &str) -> TableError {
    AnalysisError::new(format!("MERGE Validation Error: {cause}")).into()
}

/// `Analysis`: a MERGE statement could not be resolved; `cause` is the message.
///
/// The message is `cause` verbatim, so an empty `cause` yields an empty message.
pub fn merge_resolution_error(cause: &str) -> TableError {
    AnalysisError::new(cause).into()
}

/// `RuntimeFailure`: a MERGE uses an unsupported construct; `cause` is the message.
///
/// The message is `cause` verbatim, so an empty `cause` yields an empty message.
pub fn merge_unsupported_error(cause: &str) -> TableError {
    TableError::runtime(cause)
}
