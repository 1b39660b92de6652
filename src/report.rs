//! Structured logging for errors at the point where they are raised.
//!
//! The catalog never logs; callers that want a record of a failure pass it
//! to [`report`] before propagating it.

use crate::error::TableError;
use std::error::Error as StdError;

/// Emits one `tracing` event describing `error`.
///
/// Failures caused by the request (bad arguments, unsupported operations,
/// analysis errors) are logged at `WARN`; runtime and transaction failures
/// at `ERROR`.
pub fn report(error: &TableError) {
    let kind = error.kind().as_str();
    match error {
        TableError::InvalidArgument { message } | TableError::UnsupportedOperation { message } => {
            tracing::warn!(kind, "{message}");
        }
        TableError::RuntimeFailure { message, cause } => {
            tracing::error!(
                kind,
                cause = cause.as_ref().map(tracing::field::display),
                "{message}"
            );
        }
        TableError::Transaction(e) => {
            tracing::error!(
                kind,
                txn_id = e.txn_id(),
                table = e.table_name(),
                "{}",
                e.message()
            );
        }
        TableError::Analysis(e) => {
            tracing::warn!(
                kind,
                line = e.line(),
                start_position = e.start_position(),
                cause = e.cause().map(tracing::field::display),
                "{}",
                e.render()
            );
        }
    }
}

/// Iterates the `source()` chain of `error`, starting with its direct cause.
pub fn causes<'a>(
    error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> + 'a {
    std::iter::successors(error.source(), |&e| e.source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::Cause;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(error: &TableError) -> String {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || report(error));
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_transaction_error_logged_with_ids() {
        let out = capture(&catalog::txn_outdated(11, "db.orders"));
        assert!(out.contains("ERROR"), "{out}");
        assert!(out.contains("txn_id=11"), "{out}");
        assert!(out.contains("table=\"db.orders\""), "{out}");
        assert!(out.contains("kind=\"transaction\""), "{out}");
    }

    #[test]
    fn test_analysis_error_logged_as_warning() {
        let out = capture(&catalog::merge_validation_error("bad clause"));
        assert!(out.contains("WARN"), "{out}");
        assert!(out.contains("MERGE Validation Error: bad clause;"), "{out}");
    }

    #[test]
    fn test_runtime_cause_logged() {
        let err = catalog::could_not_acquire_lock(Some(Cause::new(io::Error::new(
            io::ErrorKind::Other,
            "lock service down",
        ))));
        let out = capture(&err);
        assert!(out.contains("cause=lock service down"), "{out}");
    }

    #[test]
    fn test_causes_walks_chain() {
        let inner = catalog::txn_no_transaction();
        let outer = catalog::could_not_acquire_lock(Some(Cause::from(inner)));
        let chain: Vec<String> = causes(&outer).map(|e| e.to_string()).collect();
        assert_eq!(chain, vec!["No transaction found".to_string()]);

        assert_eq!(causes(&catalog::table_not_specified()).count(), 0);
    }

    #[test]
    fn test_causes_walks_nested_chain_in_order() {
        let root = io::Error::new(io::ErrorKind::ConnectionReset, "socket closed");
        let lock = catalog::could_not_acquire_lock(Some(Cause::new(root)));
        let read = TableError::runtime_with_cause(
            "Unexpected error while reading the ACID table data: lock lost",
            Some(Cause::from(lock)),
        );
        let outer = catalog::could_not_acquire_lock(Some(Cause::from(read)));

        let chain: Vec<String> = causes(&outer).map(|e| e.to_string()).collect();
        assert_eq!(
            chain,
            vec![
                "Unexpected error while reading the ACID table data: lock lost".to_string(),
                "Could not acquire lock.".to_string(),
                "socket closed".to_string(),
            ]
        );
    }
}
