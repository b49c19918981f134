//! Local (in-process) client for the claim resolver.

use std::sync::Arc;

use async_trait::async_trait;
use claim_resolver_sdk::{
    ClaimResolverClient, ClaimResolverError, ResolvedClaimSet, TokenDescriptor,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Implements the SDK's [`ClaimResolverClient`] trait and owns the
/// error-policy boundary: unexpected domain failures are logged with the
/// username context and surfaced as [`ClaimResolverError::ResolutionFailed`].
pub struct ClaimResolverLocalClient {
    svc: Arc<Service>,
}

impl ClaimResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(username: &str, e: &DomainError) -> ClaimResolverError {
    tracing::error!(%username, error = %e, "claim resolution failed");
    ClaimResolverError::ResolutionFailed {
        username: username.to_owned(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl ClaimResolverClient for ClaimResolverLocalClient {
    async fn resolve(
        &self,
        token: &TokenDescriptor,
    ) -> Result<ResolvedClaimSet, ClaimResolverError> {
        self.svc
            .resolve_claims(token)
            .await
            .map_err(|e| log_and_convert(&token.authorized_username, &e))
    }
}
