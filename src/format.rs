//! Column-name formatting shared by the catalog messages.

/// Wraps a column name in backticks.
pub fn format_column(name: &str) -> String {
    format!("`{name}`")
}

/// Backtick-quotes every name and renders them as `[a, b, c]`.
pub fn format_column_list<S: AsRef<str>>(names: &[S]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format_column(n.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}
