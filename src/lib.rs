//! # acid-table-errors
//!
//! A structured error catalog for transactional (ACID) table connectors.
//!
//! ## Features
//!
//! - **Typed Kinds**: One [`TableError`] enum; match on it or on [`ErrorKind`] at the catch site
//! - **Transaction Context**: [`TransactionError`] carries the transaction id and table name
//! - **Query Diagnostics**: [`AnalysisError`] carries source position and an opaque query plan
//! - **Pure Factories**: Every failure condition has a constructor in [`catalog`]; none performs I/O
//! - **Thread Safe**: All error values are immutable, `Clone`, `Send` and `Sync`
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! acid-table-errors = "0.2"
//! ```
//!
//! ## Examples
//!
//! ### Raising a Catalog Error
//!
//! ```rust
//! use acid_table_errors::{catalog, Result};
//!
//! fn open_write(txn_open: bool, table: &str) -> Result<()> {
//!     if !txn_open {
//!         return Err(catalog::txn_not_started(table));
//!     }
//!     Ok(())
//! }
//!
//! let err = open_write(false, "sales.orders").unwrap_err();
//! assert_eq!(err.to_string(), "Transaction on sales.orders not started");
//! ```
//!
//! ### Branching on the Kind
//!
//! ```rust
//! use acid_table_errors::{catalog, TableError};
//!
//! let err = catalog::txn_outdated(42, "sales.orders");
//! match &err {
//!     TableError::Transaction(txn) => {
//!         // restart the transaction that went stale
//!         assert_eq!(txn.txn_id(), 42);
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! ### Analysis Diagnostics
//!
//! ```rust
//! use acid_table_errors::{AnalysisError, QueryPlan};
//!
//! let err = AnalysisError::new("cannot resolve `x`")
//!     .with_plan(QueryPlan::new("Project [x]"))
//!     .with_line(2);
//! assert_eq!(err.render(), "cannot resolve `x`; line 2");
//! assert_eq!(err.render_with_plan(), "cannot resolve `x`; line 2;\nProject [x]");
//!
//! // repositioning keeps only the message
//! let moved = err.with_position(Some(4), Some(10));
//! assert!(moved.plan().is_none());
//! assert_eq!(moved.render(), "cannot resolve `x`; line 4 pos 10");
//! ```
//!
//! ### Logging at the Raise Site
//!
//! ```rust
//! use acid_table_errors::{catalog, report};
//!
//! let err = catalog::could_not_acquire_lock_state("WAITING");
//! report::report(&err); // one tracing event at ERROR level
//! ```
//!
//! ## Optional Features
//!
//! - `anyhow`: `anyhow::Error` converts into a [`Cause`], plus [`could_not_acquire_lock_anyhow`]
//! - `sqlx`: `sqlx::Error` converts into a [`TableError::RuntimeFailure`]
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at your option.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod format;
pub mod report;
pub mod transaction;

#[cfg(feature = "anyhow")]
mod anyhow_compat;
#[cfg(feature = "sqlx")]
mod sqlx_compat;

pub use analysis::{AnalysisError, QueryPlan};
pub use catalog::SaveMode;
pub use error::{Cause, ErrorKind, Result, TableError};
pub use format::{format_column, format_column_list};
pub use transaction::TransactionError;

#[cfg(feature = "anyhow")]
pub use anyhow_compat::could_not_acquire_lock_anyhow;

/// Convenience re-exports for common use cases
pub mod prelude {
    pub use crate::analysis::{AnalysisError, QueryPlan};
    pub use crate::catalog::{self, SaveMode};
    pub use crate::error::{Cause, ErrorKind, Result, TableError};
    pub use crate::transaction::TransactionError;
}
