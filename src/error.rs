//! Error types for RQL.

use thiserror::Error;

/// Errors surfaced while rendering a query tree. Building a tree never
/// fails; everything is reported at the render boundary.
#[derive(Debug, Error)]
pub enum RqlError {
    /// The visitor has no rendering rule for this node variant.
    #[error("Unsupported node: no renderer registered for {kind}")]
    UnsupportedNode { kind: &'static str },

    /// A SELECT reached the generator without a source relation.
    #[error("Cannot render a SELECT without a table; call from() first")]
    MissingTable,
}

impl RqlError {
    /// Create an unsupported-node error for the given variant name.
    pub fn unsupported(kind: &'static str) -> Self {
        Self::UnsupportedNode { kind }
    }
}

/// Result type alias for RQL operations.
pub type RqlResult<T> = Result<T, RqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RqlError::unsupported("Grouping");
        assert_eq!(
            err.to_string(),
            "Unsupported node: no renderer registered for Grouping"
        );
    }
}
