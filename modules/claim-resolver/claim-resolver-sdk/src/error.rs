//! Error types for the claim resolver module.

use thiserror::Error;

/// Errors that can occur when using the claim resolver API.
///
/// Benign "no data" conditions (no resolvable realm, no service-provider
/// record, empty attribute store result) are not errors; the resolver
/// returns an empty claim set for those. This error is fatal to the
/// surrounding request and never accompanies a partial result.
#[derive(Debug, Error)]
pub enum ClaimResolverError {
    /// An unexpected failure occurred while resolving claims.
    #[error("failed to resolve claims for '{username}': {reason}")]
    ResolutionFailed {
        /// The username claims were being resolved for.
        username: String,
        /// Human-readable description of the underlying failure.
        reason: String,
    },
}

/// Errors raised by [`AttributeStore`](crate::AttributeStore) implementations.
///
/// `UserNotFound` is a structured variant so callers never have to inspect
/// error messages to recognize the condition.
#[derive(Debug, Error)]
pub enum AttributeStoreError {
    /// The user does not exist in the store.
    #[error("user '{username}' not found in the attribute store")]
    UserNotFound {
        /// The tenant-aware username that was looked up.
        username: String,
    },

    /// The store backend failed.
    #[error("attribute store failure: {0}")]
    Backend(String),
}

/// Errors raised by the remaining collaborator contracts.
///
/// Collaborators signal "not found" through `Option` returns, not through
/// this type; every `CollaboratorError` is treated as unexpected.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The collaborator is not available yet.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
