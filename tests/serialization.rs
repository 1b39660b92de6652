use acid_table_errors::prelude::*;
use serde_json::json;
use std::io;

#[test]
fn transaction_error_serializes_ids() {
    let value = serde_json::to_value(catalog::txn_outdated(3, "db.t")).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "transaction",
            "message": "Transaction 3 is no longer valid",
            "txn_id": 3,
            "table_name": "db.t",
        })
    );
}

#[test]
fn analysis_error_omits_plan() {
    let err: TableError = AnalysisError::new("E")
        .with_line(3)
        .with_start_position(7)
        .with_plan(QueryPlan::new("Project [*]"))
        .into();
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "analysis",
            "message": "E",
            "line": 3,
            "start_position": 7,
            "cause": null,
        })
    );
    assert!(!value.to_string().contains("Project"));
}

#[test]
fn runtime_failure_serializes_cause_text() {
    let err = catalog::could_not_acquire_lock(Some(Cause::new(io::Error::new(
        io::ErrorKind::TimedOut,
        "metastore timeout",
    ))));
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "runtime_failure",
            "message": "Could not acquire lock.",
            "cause": "metastore timeout",
        })
    );
}

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(ErrorKind::UnsupportedOperation).unwrap(),
        json!("unsupported_operation")
    );
    assert_eq!(
        serde_json::to_value(catalog::table_not_specified()).unwrap()["kind"],
        json!("invalid_argument")
    );
}
