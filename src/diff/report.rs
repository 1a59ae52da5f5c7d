use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Outcome of a diff: both sides rendered on their own, plus the merged
/// line sequence with divergences annotated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    /// Left tree rendered standalone.
    pub left: Vec<String>,
    /// Right tree rendered standalone.
    pub right: Vec<String>,
    /// Merged rendering; `-`/`+` blocks and `(- ...)` annotations mark the
    /// points of divergence.
    pub lines: Vec<String>,
}

impl DiffReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Display for DiffReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
