//! Domain errors for the claim resolver.
//!
//! Only unexpected failures become a `DomainError`. Benign "no data"
//! conditions (no realm, no service-provider record, empty store result,
//! user not found in the store) are handled inside the service and yield an
//! empty claim set instead.

use claim_resolver_sdk::CollaboratorError;

/// Internal domain errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("attribute store failure: {0}")]
    AttributeStore(String),
}
