/// Result of sanitizing a single SQL statement.
///
/// Both fields are owned, immutable once constructed, and may be empty.
/// `Default` yields the `("", "")` pair returned for a null/absent input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementInfo {
    /// The input with every literal replaced by `?` and comments elided.
    /// Identifiers, keywords, operators, and whitespace are preserved
    /// structurally.
    pub sanitized_sql: String,
    /// A low-cardinality label naming the operation and its primary
    /// target(s), e.g. `SELECT Customers` or `CREATE TABLE foo`.
    pub summary: String,
}

impl StatementInfo {
    pub(crate) fn new(sanitized_sql: String, summary: String) -> Self {
        Self {
            sanitized_sql,
            summary,
        }
    }
}
