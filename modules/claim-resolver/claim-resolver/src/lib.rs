//! Claim Resolver Module
//!
//! Resolves a verified user's identity attributes into the vocabulary
//! expected by a relying application, given only a validated access token.
//! Sits between token validation and response formatting in an identity
//! provider's token-introspection/userinfo flow.
//!
//! The module holds no state of its own: each resolution is a single linear
//! pipeline over five injected collaborator contracts (realm lookup, token
//! record lookup, application registry, dialect translator, attribute
//! store), all defined in `claim_resolver_sdk`.
//!
//! Provides [`domain::ClaimResolverLocalClient`], which implements the SDK's
//! `ClaimResolverClient` trait for in-process consumption.

pub mod config;
pub mod domain;
