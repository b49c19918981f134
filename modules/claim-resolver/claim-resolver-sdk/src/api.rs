//! Public API trait for the claim resolver.
//!
//! This trait defines the interface that token-introspection and userinfo
//! handlers use to turn a validated access token into the claim set the
//! relying application is entitled to see.

use async_trait::async_trait;

use crate::error::ClaimResolverError;
use crate::models::{ResolvedClaimSet, TokenDescriptor};

/// Public API trait for the claim resolver.
///
/// ```ignore
/// let claims = resolver.resolve(&token).await?;
/// ```
///
/// # Result contract
///
/// The returned map is keyed by SP-dialect claim names, with the principal
/// identifier always under [`SUBJECT_CLAIM_KEY`](crate::SUBJECT_CLAIM_KEY).
/// An empty map is a successful "no claims available" answer; callers must
/// treat [`ClaimResolverError`] as fatal to the surrounding request.
#[async_trait]
pub trait ClaimResolverClient: Send + Sync {
    /// Resolve the claim set for a validated access token.
    ///
    /// # Arguments
    ///
    /// * `token` - Descriptor of a token the caller has already validated
    ///
    /// # Errors
    ///
    /// - `ResolutionFailed` on any unexpected collaborator failure; no
    ///   partial result is returned in that case
    async fn resolve(
        &self,
        token: &TokenDescriptor,
    ) -> Result<ResolvedClaimSet, ClaimResolverError>;
}
