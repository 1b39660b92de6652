use acid_table_errors::prelude::*;
use acid_table_errors::report;
use tracing_subscriber::EnvFilter;

/// Stand-in for a connector's write path: decides which catalog error applies.
fn begin_write(table: &str, acid: bool, open_txn: Option<u64>) -> Result<u64> {
    if table.is_empty() {
        return Err(catalog::table_not_specified());
    }
    if !acid {
        return Err(catalog::table_not_acid(table));
    }
    if let Some(txn_id) = open_txn {
        return Err(catalog::txn_already_open(txn_id));
    }
    Ok(1)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Raise Site Example ===\n");

    let attempts = [
        ("", true, None),
        ("default.events", false, None),
        ("default.events", true, Some(7)),
        ("default.events", true, None),
    ];

    for (table, acid, open_txn) in attempts {
        match begin_write(table, acid, open_txn) {
            Ok(txn_id) => println!("   ✓ Started transaction {}", txn_id),
            Err(err) => {
                report::report(&err);
                println!("   ✗ {} ({})", err, err.kind());
            }
        }
    }

    println!("\nRecovering from an outdated transaction...");
    let err = catalog::txn_outdated(42, "default.events");
    if let TableError::Transaction(txn) = &err {
        println!(
            "   Restarting transaction {} on {}",
            txn.txn_id(),
            txn.table_name()
        );
    }

    println!("\nAnalysis diagnostics:");
    let err = AnalysisError::new("cannot resolve `amount`")
        .with_plan(QueryPlan::new("Project [amount]\n+- Relation default.events"))
        .with_line(1)
        .with_start_position(7);
    println!("{}", err.render_with_plan());
    println!("{}", err.with_position(Some(2), None).render());
}
