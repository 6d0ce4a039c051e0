//! Error types for the screening engine.

use thiserror::Error;

/// Errors from the constitutional review seam.
///
/// Classification itself has no error path; the reviewer is the only
/// external collaborator behind the engine. How these errors affect a
/// verdict is governed by [`EngineConfig::fail_closed`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The reviewer backend failed (network, credentials, timeout).
    #[error("reviewer backend failure: {0}")]
    Backend(String),

    /// The reviewer replied, but no verdict could be parsed from it.
    #[error("reviewer returned no parseable verdict: {raw}")]
    MalformedVerdict {
        /// The unparseable reply, for the audit trail.
        raw: String,
    },
}
