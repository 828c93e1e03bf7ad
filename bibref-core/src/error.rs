//! Error types for reference operations.

use crate::types::BookId;

/// Errors that can occur while querying a parsed reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// A single range spans two books. Downstream consumers cannot
    /// represent these, so intersection refuses the citation instead of
    /// guessing; the caller has to reject it upstream.
    #[error("range starts in '{start}' but ends in '{end}': start and end book must match")]
    CrossBookRange { start: BookId, end: BookId },

    /// The localized book-name table has no entry for this id. The table
    /// is contractually total over the supported canon, so a miss is a
    /// misconfigured collaborator, not bad input — never defaulted over.
    #[error("no localized name for book '{0}'")]
    BookNotFound(BookId),
}
