//! Error types for jobmail.
//!
//! The core is pure computation and is designed to never fail past its
//! own boundary: malformed fields resolve to `None`/defaults, and the
//! batch orchestrators log and skip any email whose parse errors.
//! Errors here exist for the per-email entry points and for the
//! external application store the matcher reads from.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Per-email parsing errors.
///
/// Caught at the batch-orchestrator boundary; the offending email is
/// dropped from results and the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Email has no message ID (from: {from_address})")]
    MissingMessageId { from_address: String },
}

/// Errors from the external application store.
///
/// The store is a caller-provided collaborator; its failures surface
/// only through `find_matching_applications`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
