use crate::error::Cause;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to a logical plan produced by the host query planner.
///
/// The plan is only stored and rendered for diagnostics. It takes no part in
/// equality or serialization of the error that carries it.
#[derive(Clone)]
pub struct QueryPlan(Arc<dyn fmt::Display + Send + Sync + 'static>);

impl QueryPlan {
    /// Wraps any displayable plan representation.
    pub fn new<P>(plan: P) -> Self
    where
        P: fmt::Display + Send + Sync + 'static,
    {
        Self(Arc::new(plan))
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryPlan(..)")
    }
}

/// A semantic failure found while analysing a query.
///
/// `Display` renders the full diagnostic, plan included; see
/// [`render`](Self::render) for the plan-free form.
///
/// # Examples
///
/// ```rust
/// use acid_table_errors::AnalysisError;
///
/// let err = AnalysisError::new("E").with_line(3).with_start_position(7);
/// assert_eq!(err.render(), "E; line 3 pos 7");
/// assert_eq!(AnalysisError::new("E").render(), "E;");
/// ```
#[derive(Debug, Clone, thiserror::Error, Serialize)]
#[error("{}", full_text(.message, .line, .start_position, .plan))]
pub struct AnalysisError {
    message: String,
    line: Option<u32>,
    start_position: Option<u32>,
    #[serde(skip)]
    plan: Option<QueryPlan>,
    #[source]
    cause: Option<Cause>,
}

impl AnalysisError {
    /// An error with only a message: no position, plan or cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            start_position: None,
            plan: None,
            cause: None,
        }
    }

    /// Sets the source line.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the character offset within the line.
    pub fn with_start_position(mut self, start_position: u32) -> Self {
        self.start_position = Some(start_position);
        self
    }

    /// Attaches the plan being analysed, for diagnostics only.
    pub fn with_plan(mut self, plan: QueryPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Chains the error that led to this one.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Returns a new error positioned at `line` / `start_position`.
    ///
    /// Only the message is carried over: the plan and the cause of `self`
    /// are not copied into the result.
    pub fn with_position(&self, line: Option<u32>, start_position: Option<u32>) -> Self {
        Self {
            message: self.message.clone(),
            line,
            start_position,
            plan: None,
            cause: None,
        }
    }

    /// The bare message, without annotations.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source line, if known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Character offset, if known.
    pub fn start_position(&self) -> Option<u32> {
        self.start_position
    }

    /// The attached plan, if any.
    pub fn plan(&self) -> Option<&QueryPlan> {
        self.plan.as_ref()
    }

    /// The chained cause, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Message followed by the optional line and position annotations,
    /// in the form `"{message}; line {line} pos {pos}"`.
    pub fn render(&self) -> String {
        simple_text(&self.message, &self.line, &self.start_position)
    }

    /// [`render`](Self::render) followed by `";\n{plan}"` when a plan is attached.
    pub fn render_with_plan(&self) -> String {
        full_text(&self.message, &self.line, &self.start_position, &self.plan)
    }
}

impl PartialEq for AnalysisError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.line == other.line
            && self.start_position == other.start_position
            && self.cause == other.cause
    }
}

fn simple_text(message: &str, line: &Option<u32>, start_position: &Option<u32>) -> String {
    let mut text = format!("{message};");
    if let Some(line) = line {
        text.push_str(&format!(" line {line}"));
    }
    if let Some(pos) = start_position {
        text.push_str(&format!(" pos {pos}"));
    }
    text
}

fn full_text(
    message: &str,
    line: &Option<u32>,
    start_position: &Option<u32>,
    plan: &Option<QueryPlan>,
) -> String {
    let simple = simple_text(message, line, start_position);
    match plan {
        Some(plan) => format!("{simple};\n{plan}"),
        None => simple,
    }
}
